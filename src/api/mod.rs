//! The authenticated request pipeline.
//!
//! `RequestExecutor` is the single path to the backend for every service
//! client: it attaches the current bearer token, detects authorization
//! failure, refreshes the access token through the auth service, and
//! retries exactly once. Errors surface as the typed `ApiError`.

pub mod error;
pub mod executor;

pub use error::ApiError;
pub use executor::{Request, RequestExecutor, UploadForm};
