//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::enrollment::{Address, Enrollment};
use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, UserId};
use crate::ports::EnrollmentReader;

use super::utc_timestamp;

/// PostgreSQL implementation of the EnrollmentReader port.
#[derive(Clone)]
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Enrollment row left-joined with its address. Address columns are all
/// null when the enrollment has none.
#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
    name: String,
    cpf: String,
    birthday: NaiveDateTime,
    phone: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    address_id: Option<i32>,
    cep: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    number: Option<String>,
    neighborhood: Option<String>,
    address_detail: Option<String>,
}

impl EnrollmentRow {
    fn address(&mut self) -> Option<Address> {
        let id = self.address_id?;
        Some(Address {
            id,
            cep: self.cep.take().unwrap_or_default(),
            street: self.street.take().unwrap_or_default(),
            city: self.city.take().unwrap_or_default(),
            state: self.state.take().unwrap_or_default(),
            number: self.number.take().unwrap_or_default(),
            neighborhood: self.neighborhood.take().unwrap_or_default(),
            address_detail: self.address_detail.take(),
        })
    }
}

impl TryFrom<EnrollmentRow> for Enrollment {
    type Error = DomainError;

    fn try_from(mut row: EnrollmentRow) -> Result<Self, Self::Error> {
        let address = row.address();
        Ok(Enrollment {
            id: EnrollmentId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            name: row.name,
            cpf: row.cpf,
            birthday: utc_timestamp(row.birthday),
            phone: row.phone,
            address,
            created_at: utc_timestamp(row.created_at),
            updated_at: utc_timestamp(row.updated_at),
        })
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_with_address_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT e.id, e."userId" AS user_id, e.name, e.cpf, e.birthday, e.phone,
                   e."createdAt" AS created_at, e."updatedAt" AS updated_at,
                   a.id AS address_id, a.cep, a.street, a.city, a.state, a.number,
                   a.neighborhood, a."addressDetail" AS address_detail
            FROM "Enrollment" e
            LEFT JOIN "Address" a ON a."enrollmentId" = e.id
            WHERE e."userId" = $1
            ORDER BY a.id ASC NULLS LAST
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch enrollment: {}", e),
            )
        })?;

        row.map(Enrollment::try_from).transpose()
    }
}
