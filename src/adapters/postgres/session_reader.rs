//! PostgreSQL implementation of SessionReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::SessionReader;

/// PostgreSQL implementation of the SessionReader port.
#[derive(Clone)]
pub struct PostgresSessionReader {
    pool: PgPool,
}

impl PostgresSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionReader for PostgresSessionReader {
    async fn exists(&self, user_id: &UserId, token: &str) -> Result<bool, DomainError> {
        let found: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM "Session" WHERE "userId" = $1 AND token = $2
            )
            "#,
        )
        .bind(user_id.as_i32())
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check session: {}", e),
            )
        })?;

        Ok(found)
    }
}
