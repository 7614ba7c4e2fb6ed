//! Hotel eligibility rule.
//!
//! A ticket entitles its holder to browse hotels when the ticket type
//! includes accommodation and the event is attended in person.
//!
//! The ticket's payment status does not take part in the decision. A
//! `RESERVED` ticket passes the gate exactly like a `PAID` one.

use serde::Serialize;
use std::fmt;

use crate::domain::ticket::TicketType;

/// Why a ticket does not grant hotel access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityReason {
    /// The ticket type does not bundle accommodation.
    HotelNotIncluded,

    /// The event is attended online.
    RemoteEvent,
}

impl IneligibilityReason {
    /// Human-readable explanation suitable for API error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            IneligibilityReason::HotelNotIncluded => "ticket type does not include hotel",
            IneligibilityReason::RemoteEvent => "event is remote",
        }
    }
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Outcome of the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelEligibility {
    Eligible,
    Ineligible(IneligibilityReason),
}

impl HotelEligibility {
    /// Evaluates the gate for a ticket type.
    ///
    /// Hotel inclusion is checked first, so a remote ticket without hotel
    /// reports `HotelNotIncluded`.
    pub fn evaluate(ticket_type: &TicketType) -> Self {
        if !ticket_type.includes_hotel {
            return HotelEligibility::Ineligible(IneligibilityReason::HotelNotIncluded);
        }
        if ticket_type.is_remote {
            return HotelEligibility::Ineligible(IneligibilityReason::RemoteEvent);
        }
        HotelEligibility::Eligible
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, HotelEligibility::Eligible)
    }
}
