//! CLI command handlers for `Tallybook`.
//!
//! Each subcommand is implemented in its own submodule. Interactive handlers
//! are generic over their input and output streams so tests can drive them.

pub mod analyze;
pub mod calories;
pub mod config;
pub mod gradebook;
