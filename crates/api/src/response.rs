//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` acknowledgement returned by mutating
/// endpoints. Use this instead of ad-hoc `serde_json::json!` bodies so the
/// shape stays consistent across resources.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
