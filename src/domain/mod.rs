//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `enrollment` - A user's event registration
//! - `ticket` - Admission tickets and ticket types
//! - `hotel` - Hotels, rooms and the eligibility gate

pub mod enrollment;
pub mod foundation;
pub mod hotel;
pub mod ticket;
