//! In-memory registries keyed by course code and student id

pub mod courses;
pub mod students;

pub use courses::CourseRegistry;
pub use students::StudentRegistry;

/// Read-only view of course credit hours used by the enrollment engine
pub trait CourseCatalog {
    /// Credit hours of the course with this code, or `None` if it is unknown
    fn credit_hours(&self, code: &str) -> Option<u32>;
}
