//! Bridges `validator` output into the domain error type.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Flatten [`ValidationErrors`] into a single [`CoreError::Validation`]
/// naming each offending field. Fields are sorted so the message is
/// deterministic regardless of hash-map iteration order.
pub fn into_core_error(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {detail}")
        })
        .collect();
    fields.sort();

    CoreError::Validation(fields.join("; "))
}
