//! PostgreSQL implementation of TicketReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, EnrollmentId, ErrorCode, TicketId, TicketTypeId,
};
use crate::domain::ticket::{Ticket, TicketStatus, TicketType};
use crate::ports::TicketReader;

use super::utc_timestamp;

/// PostgreSQL implementation of the TicketReader port.
#[derive(Clone)]
pub struct PostgresTicketReader {
    pool: PgPool,
}

impl PostgresTicketReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Ticket row left-joined with its ticket type.
///
/// The type columns are null when the ticket references a missing type.
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    type_id: Option<i32>,
    type_name: Option<String>,
    price: Option<i32>,
    is_remote: Option<bool>,
    includes_hotel: Option<bool>,
    type_created_at: Option<NaiveDateTime>,
    type_updated_at: Option<NaiveDateTime>,
}

fn parse_status(s: &str) -> Result<TicketStatus, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid ticket status value: {}", s),
        )
    })
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let (
            Some(type_id),
            Some(type_name),
            Some(price),
            Some(is_remote),
            Some(includes_hotel),
            Some(type_created_at),
            Some(type_updated_at),
        ) = (
            row.type_id,
            row.type_name,
            row.price,
            row.is_remote,
            row.includes_hotel,
            row.type_created_at,
            row.type_updated_at,
        )
        else {
            return Err(DomainError::database("Ticket references a missing ticket type")
                .with_detail("ticket_id", row.id.to_string()));
        };

        Ok(Ticket {
            id: TicketId::new(row.id)?,
            enrollment_id: EnrollmentId::new(row.enrollment_id)?,
            status: parse_status(&row.status)?,
            ticket_type: TicketType {
                id: TicketTypeId::new(type_id)?,
                name: type_name,
                price,
                is_remote,
                includes_hotel,
                created_at: utc_timestamp(type_created_at),
                updated_at: utc_timestamp(type_updated_at),
            },
            created_at: utc_timestamp(row.created_at),
            updated_at: utc_timestamp(row.updated_at),
        })
    }
}

#[async_trait]
impl TicketReader for PostgresTicketReader {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        // status is a native enum column; cast so it decodes as text.
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT t.id, t."enrollmentId" AS enrollment_id, t.status::text AS status,
                   t."createdAt" AS created_at, t."updatedAt" AS updated_at,
                   tt.id AS type_id, tt.name AS type_name, tt.price,
                   tt."isRemote" AS is_remote, tt."includesHotel" AS includes_hotel,
                   tt."createdAt" AS type_created_at, tt."updatedAt" AS type_updated_at
            FROM "Ticket" t
            LEFT JOIN "TicketType" tt ON tt.id = t."ticketTypeId"
            WHERE t."enrollmentId" = $1
            ORDER BY t.id ASC
            LIMIT 1
            "#,
        )
        .bind(enrollment_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch ticket: {}", e),
            )
        })?;

        row.map(Ticket::try_from).transpose()
    }
}
