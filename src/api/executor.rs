//! Request execution with transparent token refresh.
//!
//! Every backend call flows through `RequestExecutor`: it attaches the
//! current bearer token from the shared `CredentialStore`, sends the
//! request, and on a 401 refreshes the access token and retries exactly
//! once. A failure on the retried request is final; the executor never
//! loops. Concurrent callers hitting a shared expiry coalesce on the
//! store's refresh gate so one expiry costs one refresh call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, multipart, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{CredentialStore, RefreshClient};
use crate::config::Config;

use super::ApiError;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A single API request. Ephemeral: built per call, never persisted.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    body: Option<Value>,
    requires_auth: bool,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            requires_auth: true,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::PATCH, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Attach a JSON body. Serialization happens once, up front, so the
    /// retried request sends identical bytes.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Serialization)?);
        Ok(self)
    }

    /// Send without credentials (login, registration).
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// A multipart upload, retained in rebuildable form.
///
/// reqwest forms are single-use, so the parts are kept as owned data and a
/// fresh `multipart::Form` is assembled per attempt; the retried upload is
/// byte-identical to the first.
#[derive(Debug, Clone)]
pub struct UploadForm {
    file_field: String,
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
    fields: Vec<(String, String)>,
}

impl UploadForm {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_field: "image".to_string(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
            fields: Vec::new(),
        }
    }

    /// Add a text field alongside the file part.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    fn to_form(&self) -> Result<multipart::Form, ApiError> {
        let part = multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)?;
        let mut form = multipart::Form::new().part(self.file_field.clone(), part);
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form)
    }
}

enum Payload<'a> {
    Empty,
    Json(&'a Value),
    Multipart(&'a UploadForm),
}

/// Executor shared by every service client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
    store: Arc<CredentialStore>,
    refresh: RefreshClient,
}

impl RequestExecutor {
    pub fn new(config: &Config, store: Arc<CredentialStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let refresh = RefreshClient::new(client.clone(), &config.auth_base);

        Ok(Self {
            client,
            store,
            refresh,
        })
    }

    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Execute a request and decode the 2xx body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let payload = match request.body.as_ref() {
            Some(body) => Payload::Json(body),
            None => Payload::Empty,
        };
        let response = self
            .dispatch(&request.method, &request.url, request.requires_auth, &payload)
            .await?;
        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        Self::decode(&text, &request.url)
    }

    /// Execute a request, discarding the 2xx body (204-style endpoints).
    pub async fn execute_unit(&self, request: Request) -> Result<(), ApiError> {
        let payload = match request.body.as_ref() {
            Some(body) => Payload::Json(body),
            None => Payload::Empty,
        };
        let response = self
            .dispatch(&request.method, &request.url, request.requires_auth, &payload)
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    /// Execute a request and return the raw 2xx body bytes (file downloads).
    pub async fn execute_raw(&self, request: Request) -> Result<Vec<u8>, ApiError> {
        let payload = match request.body.as_ref() {
            Some(body) => Payload::Json(body),
            None => Payload::Empty,
        };
        let response = self
            .dispatch(&request.method, &request.url, request.requires_auth, &payload)
            .await?;
        let response = Self::check_response(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// POST a multipart form. Credential attachment and the refresh-and-retry
    /// pipeline are identical to JSON requests; the form is rebuilt from its
    /// retained parts for the retry.
    pub async fn execute_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &UploadForm,
    ) -> Result<T, ApiError> {
        let response = self
            .dispatch(&Method::POST, url, true, &Payload::Multipart(form))
            .await?;
        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        Self::decode(&text, url)
    }

    // ===== Convenience wrappers =====

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.execute(Request::get(url)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(Request::post(url).json(body)?).await
    }

    /// POST with no body (action endpoints such as close/like).
    pub async fn post_empty<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.execute(Request::post(url)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(Request::patch(url).json(body)?).await
    }

    pub async fn delete_unit(&self, url: &str) -> Result<(), ApiError> {
        self.execute_unit(Request::delete(url)).await
    }

    // ===== Pipeline internals =====

    fn build(
        &self,
        method: &Method,
        url: &str,
        token: Option<&str>,
        payload: &Payload<'_>,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let mut builder = self.client.request(method.clone(), url);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match payload {
            Payload::Empty => {}
            Payload::Json(body) => builder = builder.json(body),
            Payload::Multipart(form) => builder = builder.multipart(form.to_form()?),
        }
        Ok(builder)
    }

    /// Send the request; on 401 refresh the access token and resend exactly
    /// once. Returns the final response, checked for status by the caller.
    async fn dispatch(
        &self,
        method: &Method,
        url: &str,
        requires_auth: bool,
        payload: &Payload<'_>,
    ) -> Result<reqwest::Response, ApiError> {
        let token = if requires_auth {
            self.store.access_token()
        } else {
            None
        };

        debug!(%method, url, authenticated = token.is_some(), "sending request");
        let response = self
            .build(method, url, token.as_deref(), payload)?
            .send()
            .await?;

        if !(requires_auth && response.status() == StatusCode::UNAUTHORIZED) {
            return Ok(response);
        }

        // Keep the original 401 body: it is the caller's result if the
        // refresh fails.
        let original_body = response.text().await.unwrap_or_default();

        if !self.refresh_access_token(token.as_deref()).await {
            warn!(url, "unauthorized and token refresh failed");
            return Err(ApiError::Auth {
                body: original_body,
            });
        }

        // Read-after-write: the store was updated before the gate was
        // released, so this read observes the refreshed token (or a newer
        // one).
        let retried_token = self.store.access_token();
        debug!(url, "retrying request with refreshed token");
        let retry = self
            .build(method, url, retried_token.as_deref(), payload)?
            .send()
            .await?;
        Ok(retry)
    }

    /// Refresh the shared access token, coalescing concurrent attempts.
    ///
    /// `stale` is the token the failed request carried. Returns true when
    /// the store holds a usable token newer than `stale`.
    async fn refresh_access_token(&self, stale: Option<&str>) -> bool {
        let Some(refresh_token) = self.store.refresh_token() else {
            return false;
        };

        let _gate = self.store.refresh_gate().lock().await;

        // Another caller may have refreshed while we waited on the gate.
        if self.store.access_token().as_deref() != stale {
            return true;
        }

        match self.refresh.refresh(&refresh_token).await {
            Ok(access) => {
                self.store.set_access(access);
                true
            }
            Err(err) => {
                warn!(error = %err, "access token refresh failed");
                false
            }
        }
    }

    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %ApiError::truncate_body(&body), "request failed");
            Err(ApiError::from_status(status, body))
        }
    }

    fn decode<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, ApiError> {
        serde_json::from_str(text).map_err(|err| {
            warn!(url, error = %err, "failed to decode response body");
            ApiError::Serialization(err)
        })
    }
}
