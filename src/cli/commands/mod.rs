//! CLI command handlers for `ccrm`.
//!
//! Each subcommand is implemented in its own submodule. Handlers that can fail
//! return a ready-to-print `✗ ...` message.

pub mod backup;
pub mod config;
pub mod export;
pub mod shell;

use campus_records::config::Config;
use campus_records::core::import;
use campus_records::core::Campus;

/// Build a campus from the configured data directory, creating sample files first if needed
///
/// # Errors
/// Returns a message if the data directory cannot be prepared or read.
pub fn load_campus(config: &Config, verbose: bool) -> Result<Campus, String> {
    import::create_sample_data_if_missing(config)
        .map_err(|e| format!("✗ Failed to prepare data directory: {e}"))?;

    let mut campus = Campus::from_config(config);
    let (students, courses) = import::import_all(config, &mut campus)
        .map_err(|e| format!("✗ Failed to load records: {e}"))?;

    if verbose {
        println!(
            "✓ Loaded {} students ({} duplicates, {} malformed) and {} courses ({} duplicates, {} malformed)",
            students.imported,
            students.duplicates,
            students.malformed,
            courses.imported,
            courses.duplicates,
            courses.malformed
        );
    }
    Ok(campus)
}
