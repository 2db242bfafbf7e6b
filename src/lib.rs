//! Async client for the ClassPoint classroom backend.
//!
//! Every backend call flows through a single authenticated request
//! pipeline: the executor attaches the current bearer token from a shared
//! [`CredentialStore`], and on a 401 exchanges the refresh token for a new
//! access token and retries exactly once. Errors surface as the typed
//! [`ApiError`] so callers branch on kind rather than message text.
//!
//! ```no_run
//! use classpoint_client::{Client, Config};
//!
//! # async fn run() -> Result<(), classpoint_client::ApiError> {
//! let client = Client::new(Config::from_env())?;
//! client.users.login("msrivera", "hunter2").await?;
//!
//! let courses = client.courses.list().await?;
//! for course in &courses {
//!     println!("{} ({})", course.name, course.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod models;
pub mod services;

pub use api::{ApiError, Request, RequestExecutor, UploadForm};
pub use auth::{CredentialStore, RefreshClient, RefreshError, TokenPair};
pub use client::Client;
pub use config::Config;
