//! HTTP handlers for hotel endpoints.
//!
//! These handlers connect Axum routes to the application query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::hotels::{
    GetHotelWithRoomsHandler, GetHotelWithRoomsQuery, ListHotelsHandler, ListHotelsQuery,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::hotel::HotelError;
use crate::ports::{EnrollmentReader, HotelReader, TicketReader};

use super::dto::{ErrorResponse, HealthResponse, HotelResponse, HotelWithRoomsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for hotel endpoints.
///
/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct HotelsAppState {
    pub enrollment_reader: Arc<dyn EnrollmentReader>,
    pub ticket_reader: Arc<dyn TicketReader>,
    pub hotel_reader: Arc<dyn HotelReader>,
}

impl HotelsAppState {
    pub fn list_hotels_handler(&self) -> ListHotelsHandler {
        ListHotelsHandler::new(
            self.enrollment_reader.clone(),
            self.ticket_reader.clone(),
            self.hotel_reader.clone(),
        )
    }

    pub fn get_hotel_with_rooms_handler(&self) -> GetHotelWithRoomsHandler {
        GetHotelWithRoomsHandler::new(
            self.enrollment_reader.clone(),
            self.ticket_reader.clone(),
            self.hotel_reader.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /hotels - List every hotel for an eligible user
pub async fn list_hotels(
    State(state): State<HotelsAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, HotelApiError> {
    let result = state
        .list_hotels_handler()
        .handle(ListHotelsQuery { user_id: user.id })
        .await?;

    let response: Vec<HotelResponse> = result.hotels.into_iter().map(HotelResponse::from).collect();
    Ok(Json(response))
}

/// GET /hotels/:hotelId - One hotel with its rooms
///
/// The id is passed on as a raw string. It is parsed after the eligibility
/// gate, and a bad segment gets this API's 400 body instead of axum's
/// plain-text rejection.
pub async fn get_hotel_by_id(
    State(state): State<HotelsAppState>,
    RequireAuth(user): RequireAuth,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, HotelApiError> {
    let result = state
        .get_hotel_with_rooms_handler()
        .handle(GetHotelWithRoomsQuery {
            user_id: user.id,
            hotel_id,
        })
        .await?;

    Ok(Json(HotelWithRoomsResponse::from(result.hotel)))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts hotel errors to HTTP responses.
#[derive(Debug)]
pub struct HotelApiError(HotelError);

impl From<HotelError> for HotelApiError {
    fn from(err: HotelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HotelApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.0.code();
        let status = match code {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            ErrorCode::InvalidHotelId | ErrorCode::InvalidFormat | ErrorCode::OutOfRange => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if let HotelError::Infrastructure(detail) = &self.0 {
            tracing::error!(error = %detail, "hotel request failed");
        }

        let body = ErrorResponse::new(code.as_str(), self.0.message());
        (status, Json(body)).into_response()
    }
}
