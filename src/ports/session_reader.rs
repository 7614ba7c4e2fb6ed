//! Session reader port.
//!
//! A signed token is only honoured while the session row that was created
//! at sign-in still exists. Signing out deletes the row, which revokes the
//! token even though its signature remains valid.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Reader port for sign-in sessions.
#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Returns true if a session for `user_id` carries exactly `token`.
    async fn exists(&self, user_id: &UserId, token: &str) -> Result<bool, DomainError>;
}
