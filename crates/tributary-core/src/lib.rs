//! Shared domain types, constants, and errors for the tributary crates.

pub mod constants;
pub mod error;
pub mod types;
