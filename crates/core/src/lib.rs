//! Shared domain types and the error taxonomy used by every other crate.

pub mod error;
pub mod types;
