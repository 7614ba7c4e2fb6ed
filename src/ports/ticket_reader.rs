//! Ticket reader port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId};
use crate::domain::ticket::Ticket;

/// Reader port for tickets.
///
/// Tickets are always returned together with their ticket type.
#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Find the ticket belonging to an enrollment.
    ///
    /// Returns `None` if the enrollment has no ticket yet.
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;
}
