//! Domain model structs and inbound views.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A `*Record` with exactly the fields a write persists
//! - A `Deserialize` view (the inbound payload) converting into the record

pub mod project;
pub mod status;
pub mod task;
