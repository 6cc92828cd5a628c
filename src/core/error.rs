//! Error taxonomy for the records engine and its collaborators

use std::path::PathBuf;

use crate::core::models::Semester;

/// Convenience alias used across the library
pub type Result<T> = std::result::Result<T, RecordsError>;

/// Errors surfaced by registries, the enrollment engine and the CSV/backup collaborators.
///
/// Every variant is recoverable: the operation that produced it left in-memory
/// state untouched.
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    /// A student, course or enrollment with this key is already stored.
    #[error("{kind} '{key}' already exists")]
    DuplicateKey {
        /// Kind of record (`student`, `course`, `enrollment`)
        kind: &'static str,
        /// Offending key
        key: String,
    },

    /// The student already holds an enrollment for this course and semester.
    #[error("student '{student_id}' is already enrolled in {course_code} for {semester}")]
    DuplicateEnrollment {
        /// Student id
        student_id: String,
        /// Course code
        course_code: String,
        /// Semester of the existing enrollment
        semester: Semester,
    },

    /// The enrollment would push the student past the per-semester credit cap.
    #[error(
        "enrolling '{student_id}' in {course_code} needs {requested} credits on top of \
         {committed} already taken in {semester}, exceeding the cap of {max}"
    )]
    MaxCreditLimitExceeded {
        /// Student id
        student_id: String,
        /// Course code being enrolled in
        course_code: String,
        /// Semester of the enrollment
        semester: Semester,
        /// Credits already committed in that semester
        committed: u64,
        /// Credits of the requested course
        requested: u32,
        /// Configured cap
        max: u32,
    },

    /// No record with this key exists.
    #[error("{kind} '{key}' not found")]
    NotFound {
        /// Kind of record
        kind: &'static str,
        /// Missing key
        key: String,
    },

    /// A constructor rejected one of its fields.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl RecordsError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
