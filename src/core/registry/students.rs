//! Student registry

use std::collections::BTreeMap;

use crate::core::error::{RecordsError, Result};
use crate::core::models::Student;

/// Students keyed by id
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: BTreeMap<String, Student>,
}

impl StudentRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student
    ///
    /// # Errors
    /// Returns `DuplicateKey` if a student with the same id exists; the registry is unchanged.
    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.students.contains_key(student.id()) {
            return Err(RecordsError::DuplicateKey {
                kind: "student",
                key: student.id().to_string(),
            });
        }
        self.students.insert(student.id().to_string(), student);
        Ok(())
    }

    /// Look up a student by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Mutable lookup, for the name/email/DOB setters
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.get_mut(id)
    }

    /// All students, ordered by id
    #[must_use]
    pub fn list(&self) -> Vec<&Student> {
        self.students.values().collect()
    }

    /// Deactivate a student. Returns whether the id was known; unknown ids are not an error.
    pub fn deactivate(&mut self, id: &str) -> bool {
        self.students.get_mut(id).map(Student::deactivate).is_some()
    }

    /// Remove a student if present
    pub fn remove(&mut self, id: &str) -> Option<Student> {
        self.students.remove(id)
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn student(id: &str, name: &str) -> Student {
        Student::new(
            id.to_string(),
            name.to_string(),
            format!("{id}@example.com"),
            NaiveDate::from_ymd_opt(2001, 5, 30).unwrap(),
            format!("REG-{id}"),
            "Electronics".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut registry = StudentRegistry::new();
        registry.add(student("S1", "Jane")).unwrap();
        let err = registry.add(student("S1", "Other")).unwrap_err();

        assert!(matches!(err, RecordsError::DuplicateKey { kind: "student", .. }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("S1").unwrap().name(), "Jane");
    }

    #[test]
    fn test_deactivate_unknown_is_noop() {
        let mut registry = StudentRegistry::new();
        registry.add(student("S1", "Jane")).unwrap();

        assert!(!registry.deactivate("S9"));
        assert!(registry.deactivate("S1"));
        assert!(!registry.find("S1").unwrap().is_active());
    }

    #[test]
    fn test_find_mut_allows_setters() {
        let mut registry = StudentRegistry::new();
        registry.add(student("S1", "Jane")).unwrap();
        if let Some(s) = registry.find_mut("S1") {
            s.set_email("jane@campus.edu".to_string());
        }
        assert_eq!(registry.find("S1").unwrap().email(), "jane@campus.edu");
    }

    #[test]
    fn test_remove_and_list() {
        let mut registry = StudentRegistry::new();
        registry.add(student("S2", "B")).unwrap();
        registry.add(student("S1", "A")).unwrap();

        let ids: Vec<&str> = registry.list().into_iter().map(Student::id).collect();
        assert_eq!(ids, vec!["S1", "S2"]);

        assert!(registry.remove("S1").is_some());
        assert!(registry.remove("S1").is_none());
        assert_eq!(registry.len(), 1);
    }
}
