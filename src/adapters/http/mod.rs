//! HTTP adapters - REST API implementations.
//!
//! - `hotels` - Hotel browsing endpoints and the health probe
//! - `middleware` - Bearer token authentication
//! - `router` - Full application router with cross-cutting layers

pub mod hotels;
pub mod middleware;
pub mod router;

pub use hotels::{hotels_routes, HotelsAppState};
pub use router::app_router;
