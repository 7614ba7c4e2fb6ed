//! ListHotelsHandler - Query handler for the hotel catalogue.
//!
//! Runs the eligibility check first; the catalogue is read only once the
//! user has passed the gate.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::hotel::{Hotel, HotelError};
use crate::ports::{EnrollmentReader, HotelReader, TicketReader};

use super::check_eligibility::{CheckEligibilityHandler, CheckEligibilityQuery};

/// Query to list every hotel.
#[derive(Debug, Clone)]
pub struct ListHotelsQuery {
    pub user_id: UserId,
}

/// Hotels in ascending id order. Possibly empty.
#[derive(Debug, Clone)]
pub struct ListHotelsResult {
    pub hotels: Vec<Hotel>,
}

/// Handler for listing hotels.
#[derive(Clone)]
pub struct ListHotelsHandler {
    eligibility: CheckEligibilityHandler,
    hotel_reader: Arc<dyn HotelReader>,
}

impl ListHotelsHandler {
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

    pub async fn handle(&self, query: ListHotelsQuery) -> Result<ListHotelsResult, HotelError> {
        self.eligibility
            .handle(CheckEligibilityQuery {
                user_id: query.user_id,
            })
            .await?;

        let hotels = self.hotel_reader.find_all().await?;
        tracing::debug!(user_id = %query.user_id, count = hotels.len(), "listed hotels");

        Ok(ListHotelsResult { hotels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecordStore;
    use crate::domain::enrollment::Enrollment;
    use crate::domain::foundation::{
        EnrollmentId, HotelId, TicketId, TicketTypeId, Timestamp,
    };
    use crate::domain::hotel::IneligibilityReason;
    use crate::domain::ticket::{Ticket, TicketStatus, TicketType};

    fn user_id() -> UserId {
        UserId::new(1).unwrap()
    }

    async fn seed_user(store: &InMemoryRecordStore, is_remote: bool, includes_hotel: bool) {
        let enrollment_id = EnrollmentId::new(7).unwrap();
        store
            .insert_enrollment(Enrollment {
                id: enrollment_id,
                user_id: user_id(),
                name: "Bruno Lima".to_string(),
                cpf: "98765432100".to_string(),
                birthday: Timestamp::now(),
                phone: "(11) 91234-5678".to_string(),
                address: None,
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            })
            .await;
        store
            .insert_ticket(Ticket {
                id: TicketId::new(8).unwrap(),
                enrollment_id,
                status: TicketStatus::Paid,
                ticket_type: TicketType {
                    id: TicketTypeId::new(9).unwrap(),
                    name: "Presencial + Hotel".to_string(),
                    price: 600,
                    is_remote,
                    includes_hotel,
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                },
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            })
            .await;
    }

    async fn seed_hotel(store: &InMemoryRecordStore, id: i32) {
        store
            .insert_hotel(Hotel {
                id: HotelId::new(id).unwrap(),
                name: format!("Hotel {}", id),
                image: "https://img.example.com/hotel.jpg".to_string(),
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            })
            .await;
    }

    fn handler(store: &InMemoryRecordStore) -> ListHotelsHandler {
        ListHotelsHandler::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        )
    }

    #[tokio::test]
    async fn lists_all_hotels_for_eligible_user() {
        let store = InMemoryRecordStore::new();
        seed_user(&store, false, true).await;
        seed_hotel(&store, 2).await;
        seed_hotel(&store, 1).await;

        let result = handler(&store)
            .handle(ListHotelsQuery { user_id: user_id() })
            .await
            .unwrap();

        let ids: Vec<i32> = result.hotels.iter().map(|h| h.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn returns_empty_list_when_no_hotels_exist() {
        let store = InMemoryRecordStore::new();
        seed_user(&store, false, true).await;

        let result = handler(&store)
            .handle(ListHotelsQuery { user_id: user_id() })
            .await
            .unwrap();

        assert!(result.hotels.is_empty());
    }

    #[tokio::test]
    async fn gate_failure_short_circuits_listing() {
        let store = InMemoryRecordStore::new();
        seed_user(&store, true, true).await;
        seed_hotel(&store, 1).await;

        let err = handler(&store)
            .handle(ListHotelsQuery { user_id: user_id() })
            .await
            .unwrap_err();

        assert_eq!(err, HotelError::PaymentRequired(IneligibilityReason::RemoteEvent));
    }

    #[tokio::test]
    async fn store_failure_maps_to_infrastructure() {
        let store = InMemoryRecordStore::new();
        seed_user(&store, false, true).await;
        store.set_fail_reads(true);

        let err = handler(&store)
            .handle(ListHotelsQuery { user_id: user_id() })
            .await
            .unwrap_err();

        assert!(matches!(err, HotelError::Infrastructure(_)));
    }
}
