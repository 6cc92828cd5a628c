//! Student model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Person;
use crate::core::error::Result;

/// A student enrolled at the institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    person: Person,
    reg_no: String,
    program: String,
    active: bool,
}

impl Student {
    /// Create an active student
    ///
    /// # Arguments
    /// * `id` - Unique student id (e.g., "S1")
    /// * `name` - Full name
    /// * `email` - Contact email
    /// * `date_of_birth` - Date of birth
    /// * `reg_no` - Registration number (e.g., "REG2001")
    /// * `program` - Degree program (e.g., "Computer Science")
    ///
    /// # Errors
    /// Returns `Validation` if `id` is empty.
    pub fn new(
        id: String,
        name: String,
        email: String,
        date_of_birth: NaiveDate,
        reg_no: String,
        program: String,
    ) -> Result<Self> {
        Ok(Self {
            person: Person::new(id, name, email, date_of_birth)?,
            reg_no,
            program,
            active: true,
        })
    }

    /// Role label used in listings
    #[must_use]
    pub const fn role(&self) -> &'static str {
        "Student"
    }

    /// Shared personal details
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Student id
    #[must_use]
    pub fn id(&self) -> &str {
        self.person.id()
    }

    /// Full name
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// Contact email
    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Date of birth
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.person.date_of_birth()
    }

    /// Registration number
    #[must_use]
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    /// Degree program
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether the student is still active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Replace the name
    pub fn set_name(&mut self, name: String) {
        self.person.set_name(name);
    }

    /// Replace the email
    pub fn set_email(&mut self, email: String) {
        self.person.set_email(email);
    }

    /// Replace the date of birth
    pub fn set_date_of_birth(&mut self, date_of_birth: NaiveDate) {
        self.person.set_date_of_birth(date_of_birth);
    }

    /// Replace the registration number
    pub fn set_reg_no(&mut self, reg_no: String) {
        self.reg_no = reg_no;
    }

    /// Replace the program
    pub fn set_program(&mut self, program: String) {
        self.program = program;
    }

    /// Mark the student inactive. There is no way back.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, RegNo={}, Program={}, Active={}",
            self.role(),
            self.person,
            self.reg_no,
            self.program,
            self.active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student::new(
            "S1".to_string(),
            "John Doe".to_string(),
            "john@example.com".to_string(),
            NaiveDate::from_ymd_opt(2000, 1, 15).unwrap(),
            "REG2001".to_string(),
            "Computer Science".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_student_creation() {
        let student = sample();
        assert_eq!(student.id(), "S1");
        assert_eq!(student.name(), "John Doe");
        assert_eq!(student.reg_no(), "REG2001");
        assert_eq!(student.program(), "Computer Science");
        assert!(student.is_active());
    }

    #[test]
    fn test_deactivate_is_one_way() {
        let mut student = sample();
        student.deactivate();
        assert!(!student.is_active());
        student.deactivate();
        assert!(!student.is_active());
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.starts_with("Student [ID=S1, Name=John Doe"));
        assert!(text.ends_with("Active=true"));
    }
}
