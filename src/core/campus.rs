//! The campus aggregate: both registries plus the enrollment engine

use crate::core::config::Config;
use crate::core::enrollment::{EnrollmentEngine, GradeDistribution};
use crate::core::error::Result;
use crate::core::models::{Enrollment, Grade, Semester};
use crate::core::registry::{CourseRegistry, StudentRegistry};

/// All in-memory records for one session
#[derive(Debug, Clone, Default)]
pub struct Campus {
    /// Student registry
    pub students: StudentRegistry,
    /// Course registry
    pub courses: CourseRegistry,
    /// Enrollment engine
    pub enrollments: EnrollmentEngine,
}

impl Campus {
    /// Create an empty campus with the given per-semester credit cap
    #[must_use]
    pub fn new(max_credits_per_semester: u32) -> Self {
        Self {
            students: StudentRegistry::new(),
            courses: CourseRegistry::new(),
            enrollments: EnrollmentEngine::new(max_credits_per_semester),
        }
    }

    /// Create an empty campus using the configured credit cap
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.records.max_credits_per_semester)
    }

    /// Enroll against this campus's course registry.
    ///
    /// # Errors
    /// See [`EnrollmentEngine::enroll`].
    pub fn enroll(
        &mut self,
        enrollment_id: &str,
        student_id: &str,
        course_code: &str,
        semester: Semester,
    ) -> Result<&Enrollment> {
        self.enrollments.enroll(
            &self.courses,
            enrollment_id,
            student_id,
            course_code,
            semester,
        )
    }

    /// Record marks for an enrollment.
    ///
    /// # Errors
    /// See [`EnrollmentEngine::record_marks`].
    pub fn record_marks(&mut self, enrollment_id: &str, marks: f64) -> Result<Grade> {
        self.enrollments.record_marks(enrollment_id, marks)
    }

    /// Remove an enrollment if present
    pub fn unenroll(&mut self, enrollment_id: &str) -> Option<Enrollment> {
        self.enrollments.unenroll(enrollment_id)
    }

    /// GPA of a student against this campus's courses
    #[must_use]
    pub fn gpa(&self, student_id: &str) -> f64 {
        self.enrollments.compute_gpa(&self.courses, student_id)
    }

    /// Grade distribution across every enrollment
    #[must_use]
    pub fn grade_distribution(&self) -> GradeDistribution {
        self.enrollments.grade_distribution()
    }
}
