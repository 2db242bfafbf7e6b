//! Process-wide credential storage.
//!
//! The access/refresh token pair lives in a single guarded slot so
//! concurrent readers can never observe a torn (old-access, new-refresh)
//! combination. The store is shared across every client via `Arc`; requests
//! read the current value at send time rather than holding a private copy.

use std::sync::{PoisonError, RwLock};

use tokio::sync::Mutex;

/// The access/refresh token pair issued at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer credential attached to each authorized request.
    pub access: String,
    /// Longer-lived credential exchanged for a new access token on expiry.
    pub refresh: String,
}

/// Shared holder of the current token pair.
///
/// Constructed explicitly (one per logical session) and passed to every
/// client, so tests can run isolated instances in parallel. Once cleared,
/// the store stays unauthenticated until the next `set_tokens`.
#[derive(Debug, Default)]
pub struct CredentialStore {
    tokens: RwLock<Option<TokenPair>>,
    /// Serializes refresh attempts across concurrent executors; see
    /// `RequestExecutor`.
    refresh_gate: Mutex<()>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the pair. Visible to every subsequent read, including
    /// requests already in flight that have not yet read the header.
    pub fn set_tokens(&self, access: impl Into<String>, refresh: impl Into<String>) {
        let mut slot = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(TokenPair {
            access: access.into(),
            refresh: refresh.into(),
        });
    }

    /// Replace only the access token, retaining the refresh token.
    ///
    /// No-op when the store holds no pair: an access token cannot exist
    /// without the refresh token it came with.
    pub fn set_access(&self, access: impl Into<String>) {
        let mut slot = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(pair) = slot.as_mut() {
            pair.access = access.into();
        }
    }

    pub fn access_token(&self) -> Option<String> {
        let slot = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().map(|pair| pair.access.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        let slot = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().map(|pair| pair.refresh.clone())
    }

    /// Snapshot of the current pair, read under a single lock.
    pub fn token_pair(&self) -> Option<TokenPair> {
        let slot = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        slot.clone()
    }

    /// Drop the pair; subsequent requests proceed unauthenticated.
    pub fn clear(&self) {
        let mut slot = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    pub fn is_authenticated(&self) -> bool {
        let slot = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        slot.is_some()
    }

    /// The gate serializing refresh attempts. Holders must re-read the
    /// access token after acquiring it: a changed token means another
    /// caller already refreshed.
    pub(crate) fn refresh_gate(&self) -> &Mutex<()> {
        &self.refresh_gate
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn set_access_retains_refresh_token() {
        let store = CredentialStore::new();
        store.set_tokens("A1", "R1");
        store.set_access("A2");

        let pair = store.token_pair().unwrap();
        assert_eq!(pair.access, "A2");
        assert_eq!(pair.refresh, "R1");
    }

    #[test]
    fn set_access_is_noop_after_clear() {
        let store = CredentialStore::new();
        store.set_tokens("A1", "R1");
        store.clear();
        store.set_access("A2");

        assert!(store.token_pair().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn readers_never_observe_a_torn_pair() {
        let store = Arc::new(CredentialStore::new());
        store.set_tokens("A1", "R1");

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..1000 {
                    store.set_tokens(format!("A{i}"), format!("R{i}"));
                }
            })
        };

        for _ in 0..1000 {
            if let Some(pair) = store.token_pair() {
                let access_suffix = pair.access.trim_start_matches('A');
                let refresh_suffix = pair.refresh.trim_start_matches('R');
                assert_eq!(access_suffix, refresh_suffix);
            }
        }

        writer.join().unwrap();
    }

    #[test]
    fn clear_makes_store_unauthenticated() {
        let store = CredentialStore::new();
        store.set_tokens("A1", "R1");
        assert!(store.is_authenticated());

        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }
}
