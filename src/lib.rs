//! Shared library for `Tallybook`
//!
//! Contains the gradebook analyzer, the calorie tracker and the ambient pieces
//! (configuration, logging) used by the `tallybook` binary.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
