//! Session validation port.
//!
//! Turns a raw bearer token into an authenticated user. The HTTP middleware
//! depends only on this trait; the JWT implementation and the test mock are
//! interchangeable.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens and resolves the user they belong to.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for tokens past their `exp`
/// - Return `AuthError::SessionNotFound` when no session holds the token
/// - Return `AuthError::ServiceUnavailable` for transient store errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
