//! Top-level client wiring the store, executor, and service clients.

use std::sync::Arc;

use crate::api::{ApiError, RequestExecutor};
use crate::auth::CredentialStore;
use crate::config::Config;
use crate::services::{CourseClient, QuizClient, SessionClient, UserClient};

/// One backend session: a credential store shared by every service client.
///
/// Clone is cheap - the executor shares one connection pool and all clones
/// observe the same credentials.
#[derive(Debug, Clone)]
pub struct Client {
    store: Arc<CredentialStore>,
    pub users: UserClient,
    pub courses: CourseClient,
    pub quizzes: QuizClient,
    pub sessions: SessionClient,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        Self::with_store(config, Arc::new(CredentialStore::new()))
    }

    /// Build a client around an existing store. Lets tests (and embedders
    /// running several logical sessions) control credential lifetime.
    pub fn with_store(config: Config, store: Arc<CredentialStore>) -> Result<Self, ApiError> {
        let executor = RequestExecutor::new(&config, Arc::clone(&store))?;

        Ok(Self {
            users: UserClient::new(executor.clone(), &config.users_base),
            courses: CourseClient::new(executor.clone(), &config.api_base),
            quizzes: QuizClient::new(executor.clone(), &config.api_base),
            sessions: SessionClient::new(executor, &config.api_base),
            store,
        })
    }

    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Drop the credentials; subsequent requests proceed unauthenticated
    /// until the next login.
    pub fn logout(&self) {
        self.store.clear();
    }
}
