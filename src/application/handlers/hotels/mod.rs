//! Hotel query handlers.
//!
//! Every handler runs the eligibility gate before touching hotel data.

mod check_eligibility;
mod get_hotel_with_rooms;
mod list_hotels;

pub use check_eligibility::{
    CheckEligibilityHandler, CheckEligibilityQuery, CheckEligibilityResult,
};
pub use get_hotel_with_rooms::{
    GetHotelWithRoomsHandler, GetHotelWithRoomsQuery, GetHotelWithRoomsResult,
};
pub use list_hotels::{ListHotelsHandler, ListHotelsQuery, ListHotelsResult};
