//! JWT session adapter.
//!
//! Implements the `SessionValidator` port for tokens issued by the platform's
//! sign-in flow. A token is accepted when:
//!
//! 1. Its HS256 signature verifies against the shared secret
//! 2. It carries an integer `userId` claim
//! 3. Its `exp` claim, if present, has not passed
//! 4. A session row still holds the exact token for that user
//!
//! Step 4 makes sign-out effective immediately, even for unexpired tokens.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionReader, SessionValidator};

/// Claims written by the sign-in flow.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(rename = "userId")]
    user_id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<u64>,
}

/// Validates platform JWTs and confirms an open session for each one.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Arc<dyn SessionReader>,
}

impl JwtSessionValidator {
    /// Create a validator for tokens signed with `secret`.
    pub fn new(secret: &SecretString, sessions: Arc<dyn SessionReader>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens from the sign-in flow may omit exp; check it only when present.
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidSignature => {
                    tracing::warn!("Token signature mismatch");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(claims.user_id).map_err(|_| {
            tracing::warn!("Invalid userId claim in token: {}", claims.user_id);
            AuthError::InvalidToken
        })?;

        let open = self.sessions.exists(&user_id, token).await.map_err(|e| {
            tracing::error!("Session lookup failed: {}", e);
            AuthError::service_unavailable(e.message)
        })?;

        if !open {
            tracing::debug!(user_id = %user_id, "No session for token");
            return Err(AuthError::SessionNotFound);
        }

        Ok(AuthenticatedUser::new(user_id))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecordStore;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-at-least-16";

    fn sign(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn now_secs() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    fn validator(store: &InMemoryRecordStore) -> JwtSessionValidator {
        JwtSessionValidator::new(
            &SecretString::new(SECRET.to_string()),
            Arc::new(store.clone()),
        )
    }

    fn user(id: i32) -> UserId {
        UserId::new(id).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Acceptance
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn accepts_token_with_open_session() {
        let store = InMemoryRecordStore::new();
        let token = sign(&SessionClaims { user_id: 7, exp: None }, SECRET);
        store.insert_session(user(7), token.clone()).await;

        let authenticated = validator(&store).validate(&token).await.unwrap();
        assert_eq!(authenticated.id, user(7));
    }

    #[tokio::test]
    async fn accepts_unexpired_token() {
        let store = InMemoryRecordStore::new();
        let token = sign(
            &SessionClaims {
                user_id: 7,
                exp: Some(now_secs() + 3600),
            },
            SECRET,
        );
        store.insert_session(user(7), token.clone()).await;

        assert!(validator(&store).validate(&token).await.is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejection
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn rejects_token_without_session() {
        let store = InMemoryRecordStore::new();
        let token = sign(&SessionClaims { user_id: 7, exp: None }, SECRET);

        let result = validator(&store).validate(&token).await;
        assert_eq!(result, Err(AuthError::SessionNotFound));
    }

    #[tokio::test]
    async fn rejects_session_belonging_to_other_user() {
        let store = InMemoryRecordStore::new();
        let token = sign(&SessionClaims { user_id: 7, exp: None }, SECRET);
        store.insert_session(user(8), token.clone()).await;

        let result = validator(&store).validate(&token).await;
        assert_eq!(result, Err(AuthError::SessionNotFound));
    }

    #[tokio::test]
    async fn rejects_token_signed_with_other_secret() {
        let store = InMemoryRecordStore::new();
        let token = sign(
            &SessionClaims { user_id: 7, exp: None },
            "another-secret-of-some-length",
        );
        store.insert_session(user(7), token.clone()).await;

        let result = validator(&store).validate(&token).await;
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn rejects_expired_token() {
        let store = InMemoryRecordStore::new();
        let token = sign(
            &SessionClaims {
                user_id: 7,
                exp: Some(now_secs() - 3600),
            },
            SECRET,
        );
        store.insert_session(user(7), token.clone()).await;

        let result = validator(&store).validate(&token).await;
        assert_eq!(result, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let store = InMemoryRecordStore::new();

        let result = validator(&store).validate("not-a-jwt").await;
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn rejects_non_positive_user_id() {
        let store = InMemoryRecordStore::new();
        let token = sign(&SessionClaims { user_id: 0, exp: None }, SECRET);

        let result = validator(&store).validate(&token).await;
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn store_failure_is_service_unavailable() {
        let store = InMemoryRecordStore::new();
        let token = sign(&SessionClaims { user_id: 7, exp: None }, SECRET);
        store.set_fail_reads(true);

        let result = validator(&store).validate(&token).await;
        assert!(result.unwrap_err().is_transient());
    }

    #[test]
    fn jwt_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtSessionValidator>();
    }
}
