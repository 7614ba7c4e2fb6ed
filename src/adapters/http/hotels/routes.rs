//! Axum router configuration for hotel endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_hotel_by_id, health, list_hotels, HotelsAppState};

/// Create the hotel API router.
///
/// # Routes
///
/// - `GET /hotels` - List hotels (requires authentication)
/// - `GET /hotels/:hotelId` - Hotel with rooms (requires authentication)
pub fn hotels_routes() -> Router<HotelsAppState> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/:hotelId", get(get_hotel_by_id))
}

/// Routes that need no authentication.
///
/// - `GET /health` - Liveness probe
pub fn health_routes() -> Router<HotelsAppState> {
    Router::new().route("/health", get(health))
}
