//! Export command handler

use campus_records::config::Config;
use campus_records::core::export;

/// Load the data directory and write both export files
///
/// # Errors
/// Returns a message if loading or writing fails.
pub fn run(config: &Config, verbose: bool) -> Result<(), String> {
    let campus = super::load_campus(config, verbose)?;
    let paths = export::export_all(config, &campus).map_err(|e| format!("✗ Export failed: {e}"))?;
    println!(
        "✓ Exported to: {} and {}",
        paths.students.display(),
        paths.courses.display()
    );
    Ok(())
}
