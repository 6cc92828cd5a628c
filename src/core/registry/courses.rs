//! Course registry

use std::collections::BTreeMap;

use super::CourseCatalog;
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Instructor};

/// Courses keyed by code
#[derive(Debug, Clone, Default)]
pub struct CourseRegistry {
    courses: BTreeMap<String, Course>,
}

impl CourseRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course
    ///
    /// # Errors
    /// Returns `DuplicateKey` if a course with the same code exists; the registry is unchanged.
    pub fn add(&mut self, course: Course) -> Result<()> {
        if self.courses.contains_key(course.code()) {
            return Err(RecordsError::DuplicateKey {
                kind: "course",
                key: course.code().to_string(),
            });
        }
        self.courses.insert(course.code().to_string(), course);
        Ok(())
    }

    /// Look up a course by code
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// All courses, ordered by code
    #[must_use]
    pub fn list(&self) -> Vec<&Course> {
        self.courses.values().collect()
    }

    /// Remove a course if present
    pub fn remove(&mut self, code: &str) -> Option<Course> {
        self.courses.remove(code)
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses taught by the given instructor id (exact match)
    #[must_use]
    pub fn filter_by_instructor(&self, instructor_id: &str) -> Vec<&Course> {
        self.courses
            .values()
            .filter(|c| c.instructor_id() == Some(instructor_id))
            .collect()
    }

    /// Courses taught by this instructor
    #[must_use]
    pub fn taught_by(&self, instructor: &Instructor) -> Vec<&Course> {
        self.filter_by_instructor(instructor.id())
    }

    /// Courses owned by a department (case-insensitive)
    #[must_use]
    pub fn filter_by_department(&self, department: &str) -> Vec<&Course> {
        self.courses
            .values()
            .filter(|c| c.department().eq_ignore_ascii_case(department))
            .collect()
    }

    /// Courses offered in the named semester (case-insensitive, e.g. "fall")
    #[must_use]
    pub fn filter_by_semester(&self, semester_name: &str) -> Vec<&Course> {
        self.courses
            .values()
            .filter(|c| {
                c.semester()
                    .is_some_and(|s| s.name().eq_ignore_ascii_case(semester_name.trim()))
            })
            .collect()
    }
}

impl CourseCatalog for CourseRegistry {
    fn credit_hours(&self, code: &str) -> Option<u32> {
        self.find(code).map(Course::credit_hours)
    }
}
