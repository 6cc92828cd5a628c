//! Enrollment engine: business rules, grade recording and derived statistics
//!
//! The engine owns the enrollment records and reads course credit hours through a
//! [`CourseCatalog`]. Courses that cannot be resolved count as zero credits in every
//! sum and are skipped by the GPA, so a dangling reference never fails an operation.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::core::error::{RecordsError, Result};
use crate::core::models::{Enrollment, Grade, Semester};
use crate::core::registry::CourseCatalog;

/// Per-semester credit cap used when none is configured
pub const DEFAULT_MAX_CREDITS_PER_SEMESTER: u32 = 18;

/// Grade counts keyed by grade, best grade first
pub type GradeDistribution = BTreeMap<Grade, usize>;

/// Stores enrollments and enforces the enrollment rules
#[derive(Debug, Clone)]
pub struct EnrollmentEngine {
    enrollments: BTreeMap<String, Enrollment>,
    max_credits_per_semester: u32,
}

impl Default for EnrollmentEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREDITS_PER_SEMESTER)
    }
}

impl EnrollmentEngine {
    /// Create an empty engine with the given per-semester credit cap
    #[must_use]
    pub const fn new(max_credits_per_semester: u32) -> Self {
        Self {
            enrollments: BTreeMap::new(),
            max_credits_per_semester,
        }
    }

    /// Configured per-semester credit cap
    #[must_use]
    pub const fn max_credits_per_semester(&self) -> u32 {
        self.max_credits_per_semester
    }

    /// Enroll a student in a course for a semester.
    ///
    /// Checks run in order: enrollment id already used, then an existing enrollment
    /// for the same (student, course, semester), then the credit cap. Nothing is
    /// stored unless all checks pass.
    ///
    /// # Errors
    /// - `DuplicateKey` if `enrollment_id` is already in use
    /// - `DuplicateEnrollment` if the student already holds this course in this semester
    /// - `MaxCreditLimitExceeded` if the new course would push the semester total past the cap
    pub fn enroll<C: CourseCatalog + ?Sized>(
        &mut self,
        catalog: &C,
        enrollment_id: &str,
        student_id: &str,
        course_code: &str,
        semester: Semester,
    ) -> Result<&Enrollment> {
        if self.enrollments.contains_key(enrollment_id) {
            info!("Rejected enrollment {enrollment_id}: id already in use");
            return Err(RecordsError::DuplicateKey {
                kind: "enrollment",
                key: enrollment_id.to_string(),
            });
        }

        if self
            .enrollments
            .values()
            .any(|e| e.matches(student_id, course_code, semester))
        {
            info!("Rejected enrollment of {student_id} in {course_code} ({semester}): already enrolled");
            return Err(RecordsError::DuplicateEnrollment {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
                semester,
            });
        }

        let committed = self.credits_committed(catalog, student_id, semester);
        let requested = catalog.credit_hours(course_code).unwrap_or(0);
        let over_cap = committed
            .checked_add(u64::from(requested))
            .map_or(true, |total| total > u64::from(self.max_credits_per_semester));
        if over_cap {
            info!(
                "Rejected enrollment of {student_id} in {course_code} ({semester}): \
                 {committed} + {requested} credits exceeds {}",
                self.max_credits_per_semester
            );
            return Err(RecordsError::MaxCreditLimitExceeded {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
                semester,
                committed,
                requested,
                max: self.max_credits_per_semester,
            });
        }

        debug!("Enrolled {student_id} in {course_code} ({semester}) as {enrollment_id}");
        let enrollment = Enrollment::new(
            enrollment_id.to_string(),
            student_id.to_string(),
            course_code.to_string(),
            semester,
        );
        Ok(&*self
            .enrollments
            .entry(enrollment_id.to_string())
            .or_insert(enrollment))
    }

    /// Remove an enrollment. Unknown ids are ignored.
    pub fn unenroll(&mut self, enrollment_id: &str) -> Option<Enrollment> {
        self.enrollments.remove(enrollment_id)
    }

    /// Derive a grade from `marks` and store it on the enrollment, replacing any earlier grade.
    ///
    /// Marks are not range-checked here; callers validate raw input.
    ///
    /// # Errors
    /// Returns `NotFound` if no enrollment has this id.
    pub fn record_marks(&mut self, enrollment_id: &str, marks: f64) -> Result<Grade> {
        let enrollment =
            self.enrollments
                .get_mut(enrollment_id)
                .ok_or_else(|| RecordsError::NotFound {
                    kind: "enrollment",
                    key: enrollment_id.to_string(),
                })?;
        let grade = Grade::from_marks(marks);
        enrollment.set_grade(grade);
        debug!("Recorded {marks} ({grade}) for enrollment {enrollment_id}");
        Ok(grade)
    }

    /// Credits a student already carries in a semester; unknown courses add nothing
    ///
    /// Summed as `u64` so a few very large courses cannot wrap the total.
    #[must_use]
    pub fn credits_committed<C: CourseCatalog + ?Sized>(
        &self,
        catalog: &C,
        student_id: &str,
        semester: Semester,
    ) -> u64 {
        self.enrollments
            .values()
            .filter(|e| e.student_id() == student_id && e.semester() == semester)
            .map(|e| u64::from(catalog.credit_hours(e.course_code()).unwrap_or(0)))
            .sum()
    }

    /// Credit-weighted grade point average over the student's graded enrollments.
    ///
    /// Enrollments whose course cannot be resolved are left out of both sums.
    /// Returns `0.0` when nothing remains.
    #[must_use]
    pub fn compute_gpa<C: CourseCatalog + ?Sized>(&self, catalog: &C, student_id: &str) -> f64 {
        let (points, credits) = self
            .enrollments
            .values()
            .filter(|e| e.student_id() == student_id)
            .filter_map(|e| {
                let grade = e.grade()?;
                let credits = f64::from(catalog.credit_hours(e.course_code())?);
                Some((f64::from(grade.points()) * credits, credits))
            })
            .fold((0.0, 0.0), |(p, c), (ep, ec)| (p + ep, c + ec));

        if credits > 0.0 {
            points / credits
        } else {
            0.0
        }
    }

    /// Number of graded enrollments per grade, across all students
    #[must_use]
    pub fn grade_distribution(&self) -> GradeDistribution {
        let mut distribution = GradeDistribution::new();
        for grade in self.enrollments.values().filter_map(Enrollment::grade) {
            *distribution.entry(grade).or_insert(0) += 1;
        }
        distribution
    }

    /// Look up an enrollment by id
    #[must_use]
    pub fn find(&self, enrollment_id: &str) -> Option<&Enrollment> {
        self.enrollments.get(enrollment_id)
    }

    /// All enrollments of one student
    #[must_use]
    pub fn find_by_student(&self, student_id: &str) -> Vec<&Enrollment> {
        self.enrollments
            .values()
            .filter(|e| e.student_id() == student_id)
            .collect()
    }

    /// All enrollments, ordered by id
    #[must_use]
    pub fn list(&self) -> Vec<&Enrollment> {
        self.enrollments.values().collect()
    }

    /// Number of stored enrollments
    #[must_use]
    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    /// Whether no enrollment is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal catalog backed by a map
    struct Credits(HashMap<&'static str, u32>);

    impl CourseCatalog for Credits {
        fn credit_hours(&self, code: &str) -> Option<u32> {
            self.0.get(code).copied()
        }
    }

    fn catalog() -> Credits {
        Credits(HashMap::from([
            ("CS101", 4),
            ("EE201", 3),
            ("MA300", 6),
            ("PH400", 6),
        ]))
    }

    #[test]
    fn test_duplicate_id_checked_first() {
        let catalog = catalog();
        let mut engine = EnrollmentEngine::default();
        engine
            .enroll(&catalog, "E1", "S1", "CS101", Semester::Fall)
            .unwrap();

        let err = engine
            .enroll(&catalog, "E1", "S2", "EE201", Semester::Fall)
            .unwrap_err();
        assert!(matches!(
            err,
            RecordsError::DuplicateKey {
                kind: "enrollment",
                ..
            }
        ));
        assert_eq!(engine.find("E1").unwrap().student_id(), "S1");
    }

    #[test]
    fn test_duplicate_before_credit_check() {
        let catalog = catalog();
        let mut engine = EnrollmentEngine::new(4);
        engine
            .enroll(&catalog, "E1", "S1", "CS101", Semester::Fall)
            .unwrap();

        // Would also exceed the cap, but the duplicate is reported
        let err = engine
            .enroll(&catalog, "E2", "S1", "CS101", Semester::Fall)
            .unwrap_err();
        assert!(matches!(err, RecordsError::DuplicateEnrollment { .. }));
    }

    #[test]
    fn test_credit_cap_is_inclusive() {
        let catalog = catalog();
        let mut engine = EnrollmentEngine::new(16);
        engine
            .enroll(&catalog, "E1", "S1", "CS101", Semester::Spring)
            .unwrap();
        engine
            .enroll(&catalog, "E2", "S1", "MA300", Semester::Spring)
            .unwrap();
        engine
            .enroll(&catalog, "E3", "S1", "PH400", Semester::Spring)
            .unwrap();
        assert_eq!(engine.credits_committed(&catalog, "S1", Semester::Spring), 16);

        let err = engine
            .enroll(&catalog, "E4", "S1", "EE201", Semester::Spring)
            .unwrap_err();
        assert!(matches!(
            err,
            RecordsError::MaxCreditLimitExceeded {
                committed: 16,
                requested: 3,
                max: 16,
                ..
            }
        ));
        assert_eq!(engine.len(), 3);
    }

    #[test]
    fn test_unknown_course_counts_as_zero() {
        let catalog = catalog();
        let mut engine = EnrollmentEngine::new(4);
        engine
            .enroll(&catalog, "E1", "S1", "GHOST", Semester::Fall)
            .unwrap();
        engine
            .enroll(&catalog, "E2", "S1", "CS101", Semester::Fall)
            .unwrap();
        assert_eq!(engine.credits_committed(&catalog, "S1", Semester::Fall), 4);
    }

    #[test]
    fn test_huge_course_cannot_wrap_credit_cap() {
        let mut catalog = catalog();
        catalog.0.insert("HUGE", u32::MAX);
        let mut engine = EnrollmentEngine::default();
        engine
            .enroll(&catalog, "E1", "S1", "CS101", Semester::Fall)
            .unwrap();

        let err = engine
            .enroll(&catalog, "E2", "S1", "HUGE", Semester::Fall)
            .unwrap_err();
        assert!(matches!(
            err,
            RecordsError::MaxCreditLimitExceeded {
                committed: 4,
                requested: u32::MAX,
                ..
            }
        ));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_record_marks_unknown_id() {
        let mut engine = EnrollmentEngine::default();
        let err = engine.record_marks("E404", 75.0).unwrap_err();
        assert!(matches!(err, RecordsError::NotFound { .. }));
    }

    #[test]
    fn test_gpa_skips_ungraded_and_unknown_courses() {
        let catalog = catalog();
        let mut engine = EnrollmentEngine::default();
        engine
            .enroll(&catalog, "E1", "S1", "CS101", Semester::Fall)
            .unwrap();
        engine
            .enroll(&catalog, "E2", "S1", "GHOST", Semester::Fall)
            .unwrap();
        engine
            .enroll(&catalog, "E3", "S1", "EE201", Semester::Fall)
            .unwrap();
        engine.record_marks("E1", 85.0).unwrap();
        engine.record_marks("E2", 10.0).unwrap();

        assert!((engine.compute_gpa(&catalog, "S1") - 9.0).abs() < 1e-9);
        assert!(engine.compute_gpa(&catalog, "S2").abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_by_student() {
        let catalog = catalog();
        let mut engine = EnrollmentEngine::default();
        engine
            .enroll(&catalog, "E1", "S1", "CS101", Semester::Fall)
            .unwrap();
        engine
            .enroll(&catalog, "E2", "S2", "CS101", Semester::Fall)
            .unwrap();
        engine
            .enroll(&catalog, "E3", "S1", "CS101", Semester::Spring)
            .unwrap();

        let ids: Vec<&str> = engine
            .find_by_student("S1")
            .into_iter()
            .map(Enrollment::id)
            .collect();
        assert_eq!(ids, vec!["E1", "E3"]);
    }
}
