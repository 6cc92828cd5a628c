//! CSV import for student and course snapshots
//!
//! Both files have a header row followed by six comma-separated columns:
//! - `students.csv`: `id,name,email,dob,regNo,program` (`dob` as `YYYY-MM-DD`)
//! - `courses.csv`: `code,title,credits,department,semester,instructorId`
//!
//! Rows are imported one by one. Malformed rows are skipped and counted, and rows
//! whose key already exists are counted as duplicates, so importing the same file
//! twice leaves the registries unchanged.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::campus::Campus;
use crate::core::config::Config;
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Semester, Student};
use crate::core::registry::{CourseRegistry, StudentRegistry};

/// File name of the student snapshot inside the data directory
pub const STUDENTS_FILE: &str = "students.csv";
/// File name of the course snapshot inside the data directory
pub const COURSES_FILE: &str = "courses.csv";
/// Header row of student CSV files
pub const STUDENTS_HEADER: &str = "id,name,email,dob,regNo,program";
/// Header row of course CSV files
pub const COURSES_HEADER: &str = "code,title,credits,department,semester,instructorId";

/// Date format of the `dob` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum number of columns in a data row
const COLUMNS: usize = 6;

const SAMPLE_STUDENTS: [&str; 2] = [
    "S1,John Doe,john@example.com,2000-01-15,REG2001,Computer Science",
    "S2,Jane Smith,jane@example.com,2001-05-30,REG2002,Electronics",
];

const SAMPLE_COURSES: [&str; 2] = [
    "CS101,Intro to CS,4,CS,SPRING,INST1",
    "EE201,Circuits,3,EE,FALL,INST2",
];

/// Outcome of importing one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows added to the registry
    pub imported: usize,
    /// Rows skipped because the key already existed
    pub duplicates: usize,
    /// Rows skipped because they could not be parsed or validated
    pub malformed: usize,
}

/// Write the two-row sample files into the data directory if they are missing
///
/// # Errors
/// Returns `Io` if the directory or a file cannot be created.
pub fn create_sample_data_if_missing(config: &Config) -> Result<()> {
    let data_dir = config.data_dir();
    fs::create_dir_all(&data_dir).map_err(|e| RecordsError::io(&data_dir, e))?;

    for (name, header, rows) in [
        (STUDENTS_FILE, STUDENTS_HEADER, SAMPLE_STUDENTS),
        (COURSES_FILE, COURSES_HEADER, SAMPLE_COURSES),
    ] {
        let path = data_dir.join(name);
        if path.exists() {
            continue;
        }
        let mut content = String::from(header);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        fs::write(&path, content).map_err(|e| RecordsError::io(&path, e))?;
        info!("Created sample data file {}", path.display());
    }
    Ok(())
}

/// Import both snapshot files from the configured data directory
///
/// # Errors
/// Returns `Io` if either file is missing or unreadable. Students are imported
/// before courses, so a missing course file leaves the students in place.
pub fn import_all(config: &Config, campus: &mut Campus) -> Result<(ImportSummary, ImportSummary)> {
    let data_dir = config.data_dir();
    let students = import_students(&data_dir.join(STUDENTS_FILE), &mut campus.students)?;
    let courses = import_courses(&data_dir.join(COURSES_FILE), &mut campus.courses)?;
    Ok((students, courses))
}

/// Import students from a CSV file
///
/// # Errors
/// Returns `Io` if the file cannot be read. Individual bad rows never fail the import.
pub fn import_students(path: &Path, registry: &mut StudentRegistry) -> Result<ImportSummary> {
    import_rows(path, parse_student_line, |student| registry.add(student))
}

/// Import courses from a CSV file
///
/// # Errors
/// Returns `Io` if the file cannot be read. Individual bad rows never fail the import.
pub fn import_courses(path: &Path, registry: &mut CourseRegistry) -> Result<ImportSummary> {
    import_rows(path, parse_course_line, |course| registry.add(course))
}

/// Shared row loop: skip the header and blank lines, parse, insert, tally
fn import_rows<T>(
    path: &Path,
    parse: impl Fn(&[&str]) -> std::result::Result<T, String>,
    mut insert: impl FnMut(T) -> Result<()>,
) -> Result<ImportSummary> {
    let content = fs::read_to_string(path).map_err(|e| RecordsError::io(path, e))?;
    let mut summary = ImportSummary::default();

    for (idx, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_csv_line(line);
        let record = if fields.len() < COLUMNS {
            Err(format!("expected {COLUMNS} columns, found {}", fields.len()))
        } else {
            parse(&fields[..])
        };

        match record {
            Ok(record) => match insert(record) {
                Ok(()) => summary.imported += 1,
                Err(e) => {
                    debug!("Skipping row {} of {}: {e}", idx + 1, path.display());
                    summary.duplicates += 1;
                }
            },
            Err(reason) => {
                warn!(
                    "Skipping malformed row {} of {}: {reason}",
                    idx + 1,
                    path.display()
                );
                summary.malformed += 1;
            }
        }
    }

    info!(
        "Imported {} ({} new, {} duplicates, {} malformed)",
        path.display(),
        summary.imported,
        summary.duplicates,
        summary.malformed
    );
    Ok(summary)
}

/// Split a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse a `students.csv` data row
fn parse_student_line(fields: &[&str]) -> std::result::Result<Student, String> {
    let dob = NaiveDate::parse_from_str(fields[3], DATE_FORMAT)
        .map_err(|e| format!("invalid date of birth '{}': {e}", fields[3]))?;
    Student::new(
        fields[0].to_string(),
        fields[1].to_string(),
        fields[2].to_string(),
        dob,
        fields[4].to_string(),
        fields[5].to_string(),
    )
    .map_err(|e| e.to_string())
}

/// Parse a `courses.csv` data row; unknown semester names mean "no semester"
fn parse_course_line(fields: &[&str]) -> std::result::Result<Course, String> {
    let credits = fields[2]
        .parse::<u32>()
        .map_err(|e| format!("invalid credits '{}': {e}", fields[2]))?;
    let semester = if fields[4].is_empty() {
        None
    } else {
        fields[4].parse::<Semester>().ok()
    };
    Course::new(
        fields[0].to_string(),
        fields[1].to_string(),
        credits,
        fields[3].to_string(),
        semester,
        Some(fields[5].to_string()),
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line() {
        let fields = parse_csv_line(" S1 , John Doe,john@example.com ,2000-01-15,REG1,CS");
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], "S1");
        assert_eq!(fields[2], "john@example.com");
    }

    #[test]
    fn test_parse_student_rejects_bad_date() {
        let fields = ["S1", "John", "j@x", "15/01/2000", "REG", "CS"];
        assert!(parse_student_line(&fields).is_err());
    }

    #[test]
    fn test_parse_course_semester_handling() {
        let fields = ["CS101", "Intro", "4", "CS", "spring", ""];
        let course = parse_course_line(&fields).unwrap();
        assert_eq!(course.semester(), Some(Semester::Spring));
        assert!(course.instructor_id().is_none());

        let fields = ["CS102", "Intro", "4", "CS", "WINTER", "INST1"];
        let course = parse_course_line(&fields).unwrap();
        assert!(course.semester().is_none());
        assert_eq!(course.instructor_id(), Some("INST1"));
    }

    #[test]
    fn test_parse_course_rejects_bad_credits() {
        assert!(parse_course_line(&["CS101", "Intro", "four", "CS", "", ""]).is_err());
        assert!(parse_course_line(&["CS101", "Intro", "0", "CS", "", ""]).is_err());
        assert!(parse_course_line(&["CS101", "Intro", "-3", "CS", "", ""]).is_err());
    }
}
