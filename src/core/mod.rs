//! Core module: domain logic shared by every command

pub mod calories;
pub mod config;
pub mod gradebook;
pub mod input;
pub mod report;

/// Returns the current version of the `Tallybook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
