//! Strongly-typed identifier value objects.
//!
//! Every entity in the record store is keyed by a positive autoincrement
//! integer. Each key gets its own newtype so an enrollment id can never be
//! passed where a hotel id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates an id, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::out_of_range($field, 1, i32::MAX, value));
                }
                Ok(Self(value))
            }

            /// Returns the raw integer key.
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().parse::<i32>().map_err(|_| {
                    ValidationError::invalid_format($field, format!("'{}' is not an integer", s))
                })?;
                Self::new(value)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValidationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of a platform user (the subject of a session token).
    UserId,
    "user_id"
);

integer_id!(
    /// Identifier of a user's event enrollment.
    EnrollmentId,
    "enrollment_id"
);

integer_id!(
    /// Identifier of an admission ticket.
    TicketId,
    "ticket_id"
);

integer_id!(
    /// Identifier of a ticket type (reference data).
    TicketTypeId,
    "ticket_type_id"
);

integer_id!(
    /// Identifier of a hotel.
    HotelId,
    "hotel_id"
);

integer_id!(
    /// Identifier of a room within a hotel.
    RoomId,
    "room_id"
);
