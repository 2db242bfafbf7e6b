//! Typed service clients, one per backend service.
//!
//! Each client formats its own endpoint URLs and delegates every call to
//! the shared `RequestExecutor`, which owns credential attachment and the
//! refresh-and-retry pipeline.

pub mod courses;
pub mod quizzes;
pub mod sessions;
pub mod users;

pub use courses::CourseClient;
pub use quizzes::QuizClient;
pub use sessions::SessionClient;
pub use users::UserClient;
