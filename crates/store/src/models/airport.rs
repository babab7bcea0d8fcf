//! Airport record model and request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// An airport as stored and served. Keyed by `airport_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    /// Unique code supplied by the caller at creation, immutable after.
    pub airport_code: String,
    pub airport_name: String,
    pub city: String,
    pub country: String,
}

/// Creation payload. Every field is required and must be non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAirport {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub airport_code: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub airport_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub country: String,
}

/// Partial-update payload. The `airport_code` key itself is immutable and
/// therefore not part of the update shape.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAirport {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub airport_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub country: Option<String>,
}
