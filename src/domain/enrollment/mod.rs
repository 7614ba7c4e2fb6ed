//! Enrollment domain module.
//!
//! An enrollment is a user's registration for the event. It is created by
//! the registration flow elsewhere on the platform; this service only reads
//! it to find the user's ticket.

use crate::domain::foundation::{EnrollmentId, Timestamp, UserId};

/// A user's event registration, joined with its postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: Timestamp,
    pub phone: String,
    /// Absent when the registration flow stored no address yet.
    pub address: Option<Address>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Postal address attached to an enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}

impl Enrollment {
    /// Returns true if the registration flow has recorded an address.
    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }
}
