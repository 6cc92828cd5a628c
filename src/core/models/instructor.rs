//! Instructor model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Person;
use crate::core::error::Result;

/// A member of teaching staff; courses refer to instructors by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    person: Person,
    department: String,
    title: String,
}

impl Instructor {
    /// Create an instructor
    ///
    /// # Errors
    /// Returns `Validation` if `id` is empty.
    pub fn new(
        id: String,
        name: String,
        email: String,
        date_of_birth: NaiveDate,
        department: String,
        title: String,
    ) -> Result<Self> {
        Ok(Self {
            person: Person::new(id, name, email, date_of_birth)?,
            department,
            title,
        })
    }

    /// Role label used in listings
    #[must_use]
    pub const fn role(&self) -> &'static str {
        "Instructor"
    }

    /// Shared personal details
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Instructor id
    #[must_use]
    pub fn id(&self) -> &str {
        self.person.id()
    }

    /// Home department
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Academic title (e.g., "Professor")
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the department
    pub fn set_department(&mut self, department: String) {
        self.department = department;
    }

    /// Replace the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Department={}, Title={}",
            self.role(),
            self.person,
            self.department,
            self.title
        )
    }
}
