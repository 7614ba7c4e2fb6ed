//! GetHotelWithRoomsHandler - Query handler for a single hotel and its rooms.

use std::sync::Arc;

use crate::domain::foundation::{HotelId, UserId};
use crate::domain::hotel::{HotelError, HotelWithRooms};
use crate::ports::{EnrollmentReader, HotelReader, TicketReader};

use super::check_eligibility::{CheckEligibilityHandler, CheckEligibilityQuery};

/// Query for one hotel with its rooms.
#[derive(Debug, Clone)]
pub struct GetHotelWithRoomsQuery {
    pub user_id: UserId,
    /// Hotel id as received; must parse to a positive integer.
    pub hotel_id: String,
}

#[derive(Debug, Clone)]
pub struct GetHotelWithRoomsResult {
    pub hotel: HotelWithRooms,
}

/// Handler for fetching a hotel with its rooms.
///
/// The gate runs before the id is parsed and before the hotel lookup. An
/// unenrolled or ineligible user gets the gate's error for any hotel id,
/// malformed or unknown.
#[derive(Clone)]
pub struct GetHotelWithRoomsHandler {
    eligibility: CheckEligibilityHandler,
    hotel_reader: Arc<dyn HotelReader>,
}

impl GetHotelWithRoomsHandler {
    pub fn new(
        enrollment_reader: Arc<dyn EnrollmentReader>,
        ticket_reader: Arc<dyn TicketReader>,
        hotel_reader: Arc<dyn HotelReader>,
    ) -> Self {
        Self {
            eligibility: CheckEligibilityHandler::new(enrollment_reader, ticket_reader),
            hotel_reader,
        }
    }

    pub async fn handle(
        &self,
        query: GetHotelWithRoomsQuery,
    ) -> Result<GetHotelWithRoomsResult, HotelError> {
        self.eligibility
            .handle(CheckEligibilityQuery {
                user_id: query.user_id,
            })
            .await?;

        let hotel_id: HotelId = query
            .hotel_id
            .parse()
            .map_err(|_| HotelError::invalid_hotel_id(query.hotel_id.as_str()))?;

        let hotel = self
            .hotel_reader
            .find_with_rooms(&hotel_id)
            .await?
            .ok_or_else(|| HotelError::hotel_not_found(hotel_id))?;

        tracing::debug!(
            user_id = %query.user_id,
            hotel_id = %hotel_id,
            rooms = hotel.rooms.len(),
            "fetched hotel with rooms"
        );

        Ok(GetHotelWithRoomsResult { hotel })
    }
}
