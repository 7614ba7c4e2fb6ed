//! Hotel domain module.
//!
//! Hotels and their rooms, plus the rule that decides who may see them.
//!
//! # Module Structure
//!
//! - `eligibility` - Pure gate over a ticket type
//! - `errors` - HotelError taxonomy shared by the listing queries

mod eligibility;
mod errors;

pub use eligibility::{HotelEligibility, IneligibilityReason};
pub use errors::HotelError;

use crate::domain::foundation::{HotelId, RoomId, Timestamp};

/// An accommodation option offered to in-person attendees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A bookable room. Only ever read together with its hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel with all of its rooms, ordered by room id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
