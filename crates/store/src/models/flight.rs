//! Flight record model and request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use airtrack_core::types::RecordId;

/// A single scheduled flight as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    /// Unique identifier assigned by the store at creation, immutable after.
    pub flight_id: RecordId,
    /// Airline-assigned code, e.g. `"AA100"`.
    pub flight_number: String,
    /// Departure airport code. The reference to an airport record is not
    /// enforced here.
    pub departure_airport: String,
    /// Arrival airport code.
    pub arrival_airport: String,
    /// String-encoded timestamp; format is not validated beyond presence.
    pub departure_time: String,
    /// String-encoded timestamp; format is not validated beyond presence.
    pub arrival_time: String,
    /// Free-form status, e.g. `"scheduled"`, `"delayed"`, `"cancelled"`,
    /// `"landed"`. No closed set is enforced.
    pub status: String,
}

/// Creation payload. Every field is required and must be non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFlight {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub flight_number: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub departure_airport: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub arrival_airport: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub departure_time: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub arrival_time: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: String,
}

/// Partial-update payload. An absent field means "leave unchanged"; a
/// present field must be non-empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFlight {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub flight_number: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub departure_airport: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub arrival_airport: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub departure_time: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub arrival_time: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: Option<String>,
}
