//! Authentication: credential storage and token refresh.
//!
//! This module provides:
//! - `CredentialStore`: the process-wide access/refresh token pair behind a
//!   single guarded slot
//! - `RefreshClient`: the token refresh exchange against the auth service
//!
//! The request executor combines the two: a 401 triggers at most one refresh
//! and one retry per call, with concurrent refresh attempts coalesced on the
//! store's refresh gate.

pub mod refresh;
pub mod store;

pub use refresh::{RefreshClient, RefreshError};
pub use store::{CredentialStore, TokenPair};
