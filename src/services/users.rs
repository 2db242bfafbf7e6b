//! Login and registration against the users service.

use std::sync::Arc;

use crate::api::{ApiError, Request, RequestExecutor};
use crate::auth::CredentialStore;
use crate::models::user::{LoginRequest, RegisterRequest};
use crate::models::{LoginResponse, RegisteredUser};

#[derive(Debug, Clone)]
pub struct UserClient {
    executor: RequestExecutor,
    store: Arc<CredentialStore>,
    base: String,
}

impl UserClient {
    pub(crate) fn new(executor: RequestExecutor, users_base: &str) -> Self {
        let store = Arc::clone(executor.store());
        Self {
            executor,
            store,
            base: users_base.trim_end_matches('/').to_string(),
        }
    }

    /// Authenticate and store the issued token pair.
    ///
    /// On success the shared store holds the new pair and every client
    /// sharing it is authenticated. On failure the store is left as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/login/", self.base);
        let request = Request::post(url)
            .json(&LoginRequest { username, password })?
            .public();

        let login: LoginResponse = self.executor.execute(request).await?;
        self.store.set_tokens(&login.access, &login.refresh);
        Ok(login)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, ApiError> {
        let url = format!("{}/register/", self.base);
        let request = Request::post(url)
            .json(&RegisterRequest {
                username,
                email,
                password,
            })?
            .public();
        self.executor.execute(request).await
    }
}
