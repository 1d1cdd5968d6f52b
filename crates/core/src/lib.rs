//! Domain primitives shared by the storage and HTTP layers.
//!
//! This crate performs no I/O. It owns identifier handling, pagination
//! arithmetic, and the domain-level error type.

pub mod error;
pub mod pagination;
pub mod types;
