//! Identity data shared by students and instructors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{RecordsError, Result};

/// Personal details embedded in [`Student`](super::Student) and [`Instructor`](super::Instructor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: String,
    name: String,
    email: String,
    date_of_birth: NaiveDate,
}

impl Person {
    /// Create a person record
    ///
    /// # Errors
    /// Returns `Validation` if `id` is empty or blank.
    pub fn new(id: String, name: String, email: String, date_of_birth: NaiveDate) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(RecordsError::validation("id", "cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            email,
            date_of_birth,
        })
    }

    /// Immutable identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Date of birth
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Replace the name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Replace the email
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Replace the date of birth
    pub fn set_date_of_birth(&mut self, date_of_birth: NaiveDate) {
        self.date_of_birth = date_of_birth;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID={}, Name={}, Email={}, DOB={}]",
            self.id, self.name, self.email, self.date_of_birth
        )
    }
}
