//! Backup command handlers

use campus_records::config::Config;
use campus_records::core::backup;

/// Create a timestamped backup of the export directory and report its size
///
/// # Errors
/// Returns a message if the export directory is missing or copying fails.
pub fn run_create(config: &Config) -> Result<(), String> {
    let target = backup::create_backup(config).map_err(|e| format!("✗ Backup failed: {e}"))?;
    println!("✓ Backup created at: {}", target.display());

    let size = backup::directory_size(&target)
        .map_err(|e| format!("✗ Failed to measure backup: {e}"))?;
    println!("Backup size (bytes): {size}");
    Ok(())
}

/// Print the names of existing backups, oldest first
///
/// # Errors
/// Returns a message if the backup directory cannot be read.
pub fn run_list(config: &Config) -> Result<(), String> {
    let backups =
        backup::list_backups(config).map_err(|e| format!("✗ Failed to list backups: {e}"))?;
    if backups.is_empty() {
        println!("No backups yet.");
    } else {
        for name in backups {
            println!("{name}");
        }
    }
    Ok(())
}
