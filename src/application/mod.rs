//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! All operations here are reads; nothing in the hotel access flow mutates
//! the record store.

pub mod handlers;

pub use handlers::hotels::{
    CheckEligibilityHandler, CheckEligibilityQuery, CheckEligibilityResult,
    GetHotelWithRoomsHandler, GetHotelWithRoomsQuery, GetHotelWithRoomsResult,
    ListHotelsHandler, ListHotelsQuery, ListHotelsResult,
};
