//! Hotel Access - Hotel browsing for event attendees
//!
//! Serves the hotel catalogue to users whose event ticket includes
//! accommodation for in-person attendance. Every request is authenticated
//! by a session token and passes an eligibility gate before hotel data is
//! read.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
