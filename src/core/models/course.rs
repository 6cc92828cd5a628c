//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Semester;
use crate::core::error::{RecordsError, Result};

/// Represents a course offered by the institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    credit_hours: u32,
    department: String,
    semester: Option<Semester>,
    instructor_id: Option<String>,
}

impl Course {
    /// Create a validated course
    ///
    /// # Arguments
    /// * `code` - Unique course code (e.g., "CS101")
    /// * `title` - Course title
    /// * `credit_hours` - Credit hours, must be positive
    /// * `department` - Owning department (may be empty)
    /// * `semester` - Semester the course runs in, if fixed
    /// * `instructor_id` - Id of the teaching instructor, if assigned
    ///
    /// # Errors
    /// Returns `Validation` if the code is blank or `credit_hours` is zero.
    pub fn new(
        code: String,
        title: String,
        credit_hours: u32,
        department: String,
        semester: Option<Semester>,
        instructor_id: Option<String>,
    ) -> Result<Self> {
        if code.trim().is_empty() {
            return Err(RecordsError::validation("course code", "cannot be empty"));
        }
        if credit_hours == 0 {
            return Err(RecordsError::validation(
                "credit hours",
                "must be greater than 0",
            ));
        }
        Ok(Self {
            code,
            title,
            credit_hours,
            department,
            semester,
            instructor_id: instructor_id.filter(|id| !id.trim().is_empty()),
        })
    }

    /// Course code used as the registry key
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Course title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit hours
    #[must_use]
    pub const fn credit_hours(&self) -> u32 {
        self.credit_hours
    }

    /// Owning department
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Semester the course is offered in
    #[must_use]
    pub const fn semester(&self) -> Option<Semester> {
        self.semester
    }

    /// Teaching instructor id
    #[must_use]
    pub fn instructor_id(&self) -> Option<&str> {
        self.instructor_id.as_deref()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let department = if self.department.is_empty() {
            "N/A"
        } else {
            &self.department
        };
        write!(
            f,
            "Course[Code={}, Title={}, Credits={}, Dept={}, Sem={}, Instr={}]",
            self.code,
            self.title,
            self.credit_hours,
            department,
            self.semester.map_or("N/A", Semester::name),
            self.instructor_id.as_deref().unwrap_or("N/A")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, credits: u32) -> Result<Course> {
        Course::new(
            code.to_string(),
            "Intro to CS".to_string(),
            credits,
            "CS".to_string(),
            Some(Semester::Spring),
            Some("INST1".to_string()),
        )
    }

    #[test]
    fn test_course_creation() {
        let course = course("CS101", 4).unwrap();

        assert_eq!(course.code(), "CS101");
        assert_eq!(course.title(), "Intro to CS");
        assert_eq!(course.credit_hours(), 4);
        assert_eq!(course.department(), "CS");
        assert_eq!(course.semester(), Some(Semester::Spring));
        assert_eq!(course.instructor_id(), Some("INST1"));
    }

    #[test]
    fn test_rejects_empty_code() {
        assert!(matches!(
            course("", 3),
            Err(RecordsError::Validation {
                field: "course code",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_credits() {
        assert!(matches!(
            course("CS101", 0),
            Err(RecordsError::Validation {
                field: "credit hours",
                ..
            })
        ));
    }

    #[test]
    fn test_blank_instructor_is_none() {
        let course = Course::new(
            "EE201".to_string(),
            "Circuits".to_string(),
            3,
            String::new(),
            None,
            Some(String::new()),
        )
        .unwrap();

        assert!(course.instructor_id().is_none());
        assert_eq!(
            course.to_string(),
            "Course[Code=EE201, Title=Circuits, Credits=3, Dept=N/A, Sem=N/A, Instr=N/A]"
        );
    }
}
