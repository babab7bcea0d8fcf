//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as stored and served
//! - A `Deserialize` create DTO with `validator` field constraints
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod airport;
pub mod flight;
