use reqwest::StatusCode;
use thiserror::Error;

/// Error kinds surfaced by the request pipeline.
///
/// Callers branch on the variant, not on message text: `Auth` means
/// re-authentication is required, `Status` carries the server's verdict for
/// everything else, and `Serialization` means the wire payload did not match
/// the declared type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unauthorized - token refresh did not recover the request")]
    Auth { body: String },

    #[error("request failed with status {status}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Maximum length for response bodies quoted in log lines
const MAX_LOGGED_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Map a non-2xx status to an error, retaining the full body text.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Auth { body },
            _ => ApiError::Status { status, body },
        }
    }

    /// Whether this error should force re-authentication.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    /// Truncate a response body for logging; the error value keeps the
    /// full text.
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_LOGGED_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_LOGGED_BODY_LENGTH],
                body.len()
            )
        }
    }
}
