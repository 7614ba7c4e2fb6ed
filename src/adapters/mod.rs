//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validators (JWT plus session lookup, mock)
//! - `http` - Axum routes, middleware and router assembly
//! - `memory` - In-memory record store for tests and local runs
//! - `postgres` - PostgreSQL record store readers

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use memory::InMemoryRecordStore;
pub use postgres::{
    connect_pool, PostgresEnrollmentReader, PostgresHotelReader, PostgresSessionReader,
    PostgresTicketReader,
};
