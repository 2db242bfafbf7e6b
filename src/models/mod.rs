//! Wire types for the backend services.
//!
//! Every request/response body maps to lower snake_case on the wire, which
//! is serde's default for Rust field names, so no rename attributes appear
//! here. Optional request fields that are `None` are omitted entirely (not
//! serialized as `null`); unknown fields on responses are ignored for
//! forward compatibility; a missing required field fails the decode.

pub mod course;
pub mod quiz;
pub mod session;
pub mod submission;
pub mod user;

pub use course::Course;
pub use quiz::{CreateMultipleChoiceQuiz, Quiz, QuizChoice, QuizProperties, QuizUpdate};
pub use session::{CreateSessionRequest, Session, SessionStats};
pub use submission::Submission;
pub use user::{LoginResponse, RegisteredUser};
