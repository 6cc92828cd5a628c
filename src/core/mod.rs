//! Core module: data models, registries, the enrollment engine and its I/O collaborators

pub mod backup;
pub mod campus;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod registry;

pub use campus::Campus;
pub use enrollment::{EnrollmentEngine, DEFAULT_MAX_CREDITS_PER_SEMESTER};
pub use error::{RecordsError, Result};

/// Returns the current version of the `CampusRecords` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
