//! HTTP DTOs for hotel endpoints.
//!
//! Field names follow the platform's existing JSON: camelCase, with the
//! room list under a capitalised `Rooms` key.

use serde::Serialize;

use crate::domain::hotel::{Hotel, HotelWithRooms, Room};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A hotel without its rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    /// ISO-8601 UTC with milliseconds.
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.as_i32(),
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at.to_iso_string(),
            updated_at: hotel.updated_at.to_iso_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.as_i32(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.as_i32(),
            created_at: room.created_at.to_iso_string(),
            updated_at: room.updated_at.to_iso_string(),
        }
    }
}

/// A hotel together with its rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        Self {
            hotel: HotelResponse::from(value.hotel),
            rooms: value.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

/// Body for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
