//! PostgreSQL adapters - Database implementations for the record store ports.
//!
//! This module provides read-only adapters over the event platform's schema:
//! - `PostgresEnrollmentReader` - Enrollment with address by user
//! - `PostgresTicketReader` - Ticket joined with its type
//! - `PostgresHotelReader` - Hotel listing and hotel with rooms
//! - `PostgresSessionReader` - Session existence for token validation
//!
//! Table and column names are owned by the platform schema: quoted
//! PascalCase tables with camelCase columns.

mod enrollment_reader;
mod hotel_reader;
mod session_reader;
mod ticket_reader;

pub use enrollment_reader::PostgresEnrollmentReader;
pub use hotel_reader::PostgresHotelReader;
pub use session_reader::PostgresSessionReader;
pub use ticket_reader::PostgresTicketReader;

use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::Timestamp;

/// Opens a connection pool sized and timed by the database config.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}

/// The schema stores `timestamp(3)` without zone, always in UTC.
pub(crate) fn utc_timestamp(value: NaiveDateTime) -> Timestamp {
    Timestamp::from_datetime(Utc.from_utc_datetime(&value))
}
