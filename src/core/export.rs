//! CSV export of the registries
//!
//! Exports use the same schemas as the import files, header first, one row per
//! registry entry in key order.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::campus::Campus;
use crate::core::config::Config;
use crate::core::error::{RecordsError, Result};
use crate::core::import::{COURSES_HEADER, DATE_FORMAT, STUDENTS_HEADER};
use crate::core::models::Semester;
use crate::core::registry::{CourseRegistry, StudentRegistry};

/// File name of the student export inside the export directory
pub const STUDENTS_EXPORT_FILE: &str = "students_export.csv";
/// File name of the course export inside the export directory
pub const COURSES_EXPORT_FILE: &str = "courses_export.csv";

/// Paths written by [`export_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Student export file
    pub students: PathBuf,
    /// Course export file
    pub courses: PathBuf,
}

/// Export both registries into the configured export directory
///
/// # Errors
/// Returns `Io` if the directory cannot be created or a file cannot be written.
pub fn export_all(config: &Config, campus: &Campus) -> Result<ExportPaths> {
    let export_dir = config.export_dir();
    Ok(ExportPaths {
        students: export_students(&campus.students, &export_dir)?,
        courses: export_courses(&campus.courses, &export_dir)?,
    })
}

/// Write `students_export.csv` into `export_dir`, creating the directory if needed
///
/// # Errors
/// Returns `Io` on any filesystem failure.
pub fn export_students(registry: &StudentRegistry, export_dir: &Path) -> Result<PathBuf> {
    let rows = registry.list().into_iter().map(|s| {
        [
            s.id().to_string(),
            s.name().to_string(),
            s.email().to_string(),
            s.date_of_birth().format(DATE_FORMAT).to_string(),
            s.reg_no().to_string(),
            s.program().to_string(),
        ]
        .join(",")
    });
    write_csv(&export_dir.join(STUDENTS_EXPORT_FILE), STUDENTS_HEADER, rows)
}

/// Write `courses_export.csv` into `export_dir`, creating the directory if needed
///
/// # Errors
/// Returns `Io` on any filesystem failure.
pub fn export_courses(registry: &CourseRegistry, export_dir: &Path) -> Result<PathBuf> {
    let rows = registry.list().into_iter().map(|c| {
        [
            c.code().to_string(),
            c.title().to_string(),
            c.credit_hours().to_string(),
            c.department().to_string(),
            c.semester().map_or("", Semester::name).to_string(),
            c.instructor_id().unwrap_or_default().to_string(),
        ]
        .join(",")
    });
    write_csv(&export_dir.join(COURSES_EXPORT_FILE), COURSES_HEADER, rows)
}

fn write_csv(path: &Path, header: &str, rows: impl Iterator<Item = String>) -> Result<PathBuf> {
    let io_err = |e| RecordsError::io(path, e);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    writeln!(out, "{header}").map_err(io_err)?;
    let mut count = 0_usize;
    for row in rows {
        writeln!(out, "{row}").map_err(io_err)?;
        count += 1;
    }
    out.flush().map_err(io_err)?;

    info!("Exported {count} rows to {}", path.display());
    Ok(path.to_path_buf())
}
