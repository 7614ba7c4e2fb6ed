//! Ticket type reference data.

use crate::domain::foundation::{TicketTypeId, Timestamp};

/// Describes what a ticket admits to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in the platform's smallest currency unit.
    pub price: i32,
    /// The event is attended online.
    pub is_remote: bool,
    /// Accommodation is part of the package.
    pub includes_hotel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
