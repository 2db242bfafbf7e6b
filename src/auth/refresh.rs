//! Exchange of a refresh token for a new access token.
//!
//! The refresh endpoint lives on its own base URL, separate from resource
//! endpoints. Every failure mode is a `RefreshError` value; the executor
//! treats them all as "the refresh did not happen" and falls back to the
//! original 401.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("no refresh token available")]
    NoRefreshToken,

    #[error("refresh request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("refresh rejected with status {status}")]
    Rejected { status: StatusCode },

    #[error("refresh response missing access token: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Single-purpose client for the token refresh endpoint.
/// Clone is cheap - the inner reqwest::Client shares its connection pool.
#[derive(Debug, Clone)]
pub struct RefreshClient {
    client: Client,
    endpoint: String,
}

impl RefreshClient {
    pub fn new(client: Client, auth_base: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/token/refresh/", auth_base.trim_end_matches('/')),
        }
    }

    /// Exchange `refresh_token` for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, RefreshError> {
        if refresh_token.is_empty() {
            return Err(RefreshError::NoRefreshToken);
        }

        debug!(endpoint = %self.endpoint, "refreshing access token");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RefreshRequest {
                refresh: refresh_token,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "token refresh rejected");
            return Err(RefreshError::Rejected { status });
        }

        let text = response.text().await?;
        let parsed: RefreshResponse = serde_json::from_str(&text)?;
        Ok(parsed.access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_request_serializes_to_wire_shape() {
        let json = serde_json::to_string(&RefreshRequest { refresh: "R1" }).unwrap();
        assert_eq!(json, r#"{"refresh":"R1"}"#);
    }

    #[test]
    fn refresh_response_requires_access_field() {
        let ok: RefreshResponse = serde_json::from_str(r#"{"access":"A2"}"#).unwrap();
        assert_eq!(ok.access, "A2");

        // Extra fields are tolerated, a missing access token is not.
        assert!(serde_json::from_str::<RefreshResponse>(r#"{"access":"A2","detail":"x"}"#).is_ok());
        assert!(serde_json::from_str::<RefreshResponse>(r#"{"detail":"expired"}"#).is_err());
        assert!(serde_json::from_str::<RefreshResponse>(r#"{"access":42}"#).is_err());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = RefreshClient::new(Client::new(), "http://localhost:8000/api/auth/");
        assert_eq!(
            client.endpoint,
            "http://localhost:8000/api/auth/token/refresh/"
        );
    }
}
