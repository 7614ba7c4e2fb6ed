//! Hotel reader port.
//!
//! # Contract
//!
//! - `find_all` returns every hotel ordered by ascending id, without rooms.
//! - `find_with_rooms` returns one hotel with its rooms ordered by ascending
//!   room id, or `None` if the hotel does not exist.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HotelId};
use crate::domain::hotel::{Hotel, HotelWithRooms};

/// Reader port for hotels and their rooms.
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// List every hotel.
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Get one hotel with its rooms.
    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError>;
}
