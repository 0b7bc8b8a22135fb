//! Configuration module for the confetti CLI
//!
//! Provides types and parsing for `confetti.toml` configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
