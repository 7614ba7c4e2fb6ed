//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Record Store Ports (read-only)
//!
//! - `EnrollmentReader` - Enrollment lookup by user
//! - `TicketReader` - Ticket (with type) lookup by enrollment
//! - `HotelReader` - Hotel listing and hotel-with-rooms lookup
//! - `SessionReader` - Sign-in session existence check
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token to authenticated user

mod enrollment_reader;
mod hotel_reader;
mod session_reader;
mod session_validator;
mod ticket_reader;

pub use enrollment_reader::EnrollmentReader;
pub use hotel_reader::HotelReader;
pub use session_reader::SessionReader;
pub use session_validator::SessionValidator;
pub use ticket_reader::TicketReader;
