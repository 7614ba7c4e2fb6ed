//! CheckEligibilityHandler - Query handler deciding whether a user may see hotels.
//!
//! Two dependent reads followed by a pure gate:
//! enrollment for the user, then the enrollment's ticket, then
//! [`HotelEligibility::evaluate`] over the ticket type.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::hotel::{HotelEligibility, HotelError};
use crate::domain::ticket::Ticket;
use crate::ports::{EnrollmentReader, TicketReader};

/// Query to check a user's hotel eligibility.
#[derive(Debug, Clone)]
pub struct CheckEligibilityQuery {
    pub user_id: UserId,
}

/// Result of a successful eligibility check.
#[derive(Debug, Clone)]
pub struct CheckEligibilityResult {
    /// The ticket that granted access, with its type.
    pub ticket: Ticket,
}

/// Handler for the hotel eligibility check.
#[derive(Clone)]
pub struct CheckEligibilityHandler {
    enrollment_reader: Arc<dyn EnrollmentReader>,
    ticket_reader: Arc<dyn TicketReader>,
}

impl CheckEligibilityHandler {
    pub fn new(
        enrollment_reader: Arc<dyn EnrollmentReader>,
        ticket_reader: Arc<dyn TicketReader>,
    ) -> Self {
        Self {
            enrollment_reader,
            ticket_reader,
        }
    }

    pub async fn handle(
        &self,
        query: CheckEligibilityQuery,
    ) -> Result<CheckEligibilityResult, HotelError> {
        let enrollment = self
            .enrollment_reader
            .find_with_address_by_user_id(&query.user_id)
            .await?
            .ok_or_else(|| HotelError::enrollment_not_found(query.user_id))?;

        let ticket = self
            .ticket_reader
            .find_by_enrollment_id(&enrollment.id)
            .await?
            .ok_or_else(|| HotelError::ticket_not_found(enrollment.id))?;

        // Ticket status is not consulted: RESERVED tickets pass like PAID ones.
        match HotelEligibility::evaluate(&ticket.ticket_type) {
            HotelEligibility::Eligible => {
                tracing::debug!(user_id = %query.user_id, ticket_id = %ticket.id, "hotel access granted");
                Ok(CheckEligibilityResult { ticket })
            }
            HotelEligibility::Ineligible(reason) => {
                tracing::debug!(user_id = %query.user_id, ticket_id = %ticket.id, %reason, "hotel access denied");
                Err(HotelError::payment_required(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::Enrollment;
    use crate::domain::foundation::{
        DomainError, EnrollmentId, TicketId, TicketTypeId, Timestamp,
    };
    use crate::domain::hotel::IneligibilityReason;
    use crate::domain::ticket::{TicketStatus, TicketType};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockEnrollmentReader {
        enrollment: Option<Enrollment>,
        fail_read: bool,
    }

    impl MockEnrollmentReader {
        fn with(enrollment: Enrollment) -> Self {
            Self {
                enrollment: Some(enrollment),
                fail_read: false,
            }
        }

        fn empty() -> Self {
            Self {
                enrollment: None,
                fail_read: false,
            }
        }

        fn failing() -> Self {
            Self {
                enrollment: None,
                fail_read: true,
            }
        }
    }

    #[async_trait]
    impl EnrollmentReader for MockEnrollmentReader {
        async fn find_with_address_by_user_id(
            &self,
            user_id: &UserId,
        ) -> Result<Option<Enrollment>, DomainError> {
            if self.fail_read {
                return Err(DomainError::database("Simulated read failure"));
            }
            Ok(self
                .enrollment
                .clone()
                .filter(|e| e.user_id == *user_id))
        }
    }

    struct MockTicketReader {
        ticket: Option<Ticket>,
    }

    #[async_trait]
    impl TicketReader for MockTicketReader {
        async fn find_by_enrollment_id(
            &self,
            enrollment_id: &EnrollmentId,
        ) -> Result<Option<Ticket>, DomainError> {
            Ok(self
                .ticket
                .clone()
                .filter(|t| t.enrollment_id == *enrollment_id))
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn test_user_id() -> UserId {
        UserId::new(10).unwrap()
    }

    fn test_enrollment() -> Enrollment {
        Enrollment {
            id: EnrollmentId::new(20).unwrap(),
            user_id: test_user_id(),
            name: "Ana Souza".to_string(),
            cpf: "12345678909".to_string(),
            birthday: Timestamp::now(),
            phone: "(21) 98999-9999".to_string(),
            address: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn test_ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            id: TicketId::new(30).unwrap(),
            enrollment_id: EnrollmentId::new(20).unwrap(),
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(40).unwrap(),
                name: "Presencial".to_string(),
                price: 250,
                is_remote,
                includes_hotel,
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            },
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn handler_with(enrollments: MockEnrollmentReader, ticket: Option<Ticket>) -> CheckEligibilityHandler {
        CheckEligibilityHandler::new(Arc::new(enrollments), Arc::new(MockTicketReader { ticket }))
    }

    fn query() -> CheckEligibilityQuery {
        CheckEligibilityQuery {
            user_id: test_user_id(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn returns_ticket_when_in_person_with_hotel() {
        let handler = handler_with(
            MockEnrollmentReader::with(test_enrollment()),
            Some(test_ticket(TicketStatus::Paid, false, true)),
        );

        let result = handler.handle(query()).await.unwrap();
        assert_eq!(result.ticket.id.as_i32(), 30);
        assert!(result.ticket.ticket_type.includes_hotel);
    }

    #[tokio::test]
    async fn reserved_ticket_is_not_rejected_for_status() {
        let handler = handler_with(
            MockEnrollmentReader::with(test_enrollment()),
            Some(test_ticket(TicketStatus::Reserved, false, true)),
        );

        let result = handler.handle(query()).await;
        assert!(result.is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn fails_not_found_without_enrollment() {
        let handler = handler_with(MockEnrollmentReader::empty(), None);

        let err = handler.handle(query()).await.unwrap_err();
        assert_eq!(err, HotelError::EnrollmentNotFound(test_user_id()));
    }

    #[tokio::test]
    async fn fails_not_found_without_ticket() {
        let handler = handler_with(MockEnrollmentReader::with(test_enrollment()), None);

        let err = handler.handle(query()).await.unwrap_err();
        assert_eq!(err, HotelError::TicketNotFound(EnrollmentId::new(20).unwrap()));
    }

    #[tokio::test]
    async fn fails_payment_required_when_hotel_not_included() {
        let handler = handler_with(
            MockEnrollmentReader::with(test_enrollment()),
            Some(test_ticket(TicketStatus::Paid, false, false)),
        );

        let err = handler.handle(query()).await.unwrap_err();
        assert_eq!(
            err,
            HotelError::PaymentRequired(IneligibilityReason::HotelNotIncluded)
        );
    }

    #[tokio::test]
    async fn fails_payment_required_when_event_is_remote() {
        let handler = handler_with(
            MockEnrollmentReader::with(test_enrollment()),
            Some(test_ticket(TicketStatus::Paid, true, true)),
        );

        let err = handler.handle(query()).await.unwrap_err();
        assert_eq!(err, HotelError::PaymentRequired(IneligibilityReason::RemoteEvent));
    }

    #[tokio::test]
    async fn fails_infrastructure_when_reader_fails() {
        let handler = handler_with(MockEnrollmentReader::failing(), None);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(err, HotelError::Infrastructure(_)));
    }
}
