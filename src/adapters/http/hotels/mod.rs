//! Hotel HTTP adapter - REST endpoints for hotel browsing.
//!
//! # Module Structure
//!
//! - `dto` - Response DTOs for JSON serialization
//! - `handlers` - HTTP handlers and app state
//! - `routes` - Axum router configuration

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HotelResponse, HotelWithRoomsResponse, RoomResponse};
pub use handlers::{HotelApiError, HotelsAppState};
pub use routes::{health_routes, hotels_routes};
