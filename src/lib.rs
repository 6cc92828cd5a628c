//! Shared library for `CampusRecords`
//! Contains the records engine and the CSV/backup collaborators used by the CLI

pub mod core;

pub use crate::core::{config, get_version};
