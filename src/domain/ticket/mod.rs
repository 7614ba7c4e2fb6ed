//! Ticket domain module.
//!
//! # Module Structure
//!
//! - `status` - TicketStatus payment state
//! - `ticket_type` - TicketType reference data (hotel inclusion, remote flag)

mod status;
mod ticket_type;

pub use status::TicketStatus;
pub use ticket_type::TicketType;

use crate::domain::foundation::{EnrollmentId, TicketId, Timestamp};

/// Admission ticket tied to one enrollment.
///
/// The ticket type is always loaded together with the ticket; a ticket
/// without its type does not exist in this domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ticket {
    /// Returns true once the ticket has been paid for.
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }
}
