//! Request handlers.
//!
//! Each submodule provides async handler functions (list, get, create,
//! update, delete) for a single resource. Handlers delegate to the
//! corresponding service in `airtrack_store` and map errors via
//! [`crate::error::AppError`].

pub mod airports;
pub mod flights;
