//! Service layer.
//!
//! Each service is a zero-sized struct providing async CRUD methods that
//! accept `&Store` as the first argument. Services validate payloads and
//! enforce key invariants; the store itself only moves records in and out.

pub mod airport_service;
pub mod flight_service;

pub use airport_service::AirportService;
pub use flight_service::FlightService;
