//! Enrollment record

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Grade, Semester};

/// Links one student to one course for one semester, optionally carrying a grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    id: String,
    student_id: String,
    course_code: String,
    semester: Semester,
    grade: Option<Grade>,
    enrolled_at: NaiveDateTime,
}

impl Enrollment {
    /// Create an ungraded enrollment stamped with the current local time
    #[must_use]
    pub fn new(id: String, student_id: String, course_code: String, semester: Semester) -> Self {
        Self {
            id,
            student_id,
            course_code,
            semester,
            grade: None,
            enrolled_at: Local::now().naive_local(),
        }
    }

    /// Enrollment id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Enrolled student's id
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Enrolled course's code
    #[must_use]
    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    /// Semester of the enrollment
    #[must_use]
    pub const fn semester(&self) -> Semester {
        self.semester
    }

    /// Recorded grade, if any
    #[must_use]
    pub const fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Moment the enrollment was created
    #[must_use]
    pub const fn enrolled_at(&self) -> NaiveDateTime {
        self.enrolled_at
    }

    /// True when this enrollment is for the given student, course and semester
    #[must_use]
    pub fn matches(&self, student_id: &str, course_code: &str, semester: Semester) -> bool {
        self.student_id == student_id
            && self.course_code == course_code
            && self.semester == semester
    }

    pub(crate) fn set_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enrollment[id={}, student={}, course={}, sem={}, grade={}, date={}]",
            self.id,
            self.student_id,
            self.course_code,
            self.semester,
            self.grade.map_or_else(|| "N/A".to_string(), |g| g.to_string()),
            self.enrolled_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enrollment_is_ungraded() {
        let enrollment = Enrollment::new(
            "E1".to_string(),
            "S1".to_string(),
            "CS101".to_string(),
            Semester::Fall,
        );
        assert!(enrollment.grade().is_none());
        assert!(enrollment.matches("S1", "CS101", Semester::Fall));
        assert!(!enrollment.matches("S1", "cs101", Semester::Fall));
        assert!(!enrollment.matches("S1", "CS101", Semester::Spring));
    }

    #[test]
    fn test_grade_overwrite_keeps_timestamp() {
        let mut enrollment = Enrollment::new(
            "E1".to_string(),
            "S1".to_string(),
            "CS101".to_string(),
            Semester::Fall,
        );
        let stamp = enrollment.enrolled_at();
        enrollment.set_grade(Grade::B);
        enrollment.set_grade(Grade::A);
        assert_eq!(enrollment.grade(), Some(Grade::A));
        assert_eq!(enrollment.enrolled_at(), stamp);
        assert!(enrollment.to_string().contains("grade=A"));
    }
}
