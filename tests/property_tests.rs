//! Property tests for the enrollment invariants and grade derivation

use std::collections::{HashMap, HashSet};

use campus_records::core::models::{Course, Grade, Semester};
use campus_records::core::{Campus, RecordsError};
use proptest::prelude::*;

const STUDENTS: [&str; 3] = ["S1", "S2", "S3"];

/// (student, course index, semester) enroll attempts
fn attempts() -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    proptest::collection::vec((0..STUDENTS.len(), 0..6_usize, 0..Semester::ALL.len()), 0..60)
}

fn campus_with(cap: u32, credits: &[u32]) -> Campus {
    let mut campus = Campus::new(cap);
    for (idx, credit_hours) in credits.iter().enumerate() {
        let course = Course::new(
            format!("C{idx}"),
            format!("Course {idx}"),
            *credit_hours,
            "GEN".to_string(),
            None,
            None,
        )
        .unwrap();
        campus.courses.add(course).unwrap();
    }
    campus
}

proptest! {
    #[test]
    fn enrollments_never_duplicate_or_exceed_cap(
        cap in 1_u32..25,
        credits in proptest::collection::vec(
            prop_oneof![1_u32..9, (u32::MAX - 8)..=u32::MAX],
            6,
        ),
        ops in attempts(),
    ) {
        let mut campus = campus_with(cap, &credits);

        for (n, (student, course, semester)) in ops.into_iter().enumerate() {
            let before = campus.enrollments.len();
            let result = campus.enroll(
                &format!("E{n}"),
                STUDENTS[student],
                &format!("C{course}"),
                Semester::ALL[semester],
            );
            match result {
                Ok(_) => prop_assert_eq!(campus.enrollments.len(), before + 1),
                Err(RecordsError::DuplicateEnrollment { .. }
                    | RecordsError::MaxCreditLimitExceeded { .. }) => {
                    prop_assert_eq!(campus.enrollments.len(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        let mut seen = HashSet::new();
        let mut load: HashMap<(String, Semester), u64> = HashMap::new();
        for enrollment in campus.enrollments.list() {
            prop_assert!(seen.insert((
                enrollment.student_id().to_string(),
                enrollment.course_code().to_string(),
                enrollment.semester(),
            )));
            let hours = campus.courses.find(enrollment.course_code()).unwrap().credit_hours();
            *load
                .entry((enrollment.student_id().to_string(), enrollment.semester()))
                .or_insert(0) += u64::from(hours);
        }
        for total in load.values() {
            prop_assert!(*total <= u64::from(cap));
        }
    }

    #[test]
    fn gpa_stays_within_point_range(
        marks in proptest::collection::vec(0.0_f64..=100.0, 1..6),
    ) {
        let mut campus = campus_with(100, &[1, 2, 3, 4, 5, 6]);
        for (idx, mark) in marks.iter().enumerate() {
            let id = format!("E{idx}");
            campus.enroll(&id, "S1", &format!("C{idx}"), Semester::Fall).unwrap();
            campus.record_marks(&id, *mark).unwrap();
        }

        let gpa = campus.gpa("S1");
        prop_assert!((0.0..=10.0).contains(&gpa));
    }

    #[test]
    fn grade_is_monotonic_in_marks(a in 0.0_f64..=100.0, b in 0.0_f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        // Better grades sort first
        prop_assert!(Grade::from_marks(high) <= Grade::from_marks(low));
        prop_assert!(Grade::from_marks(high).points() >= Grade::from_marks(low).points());
    }
}
