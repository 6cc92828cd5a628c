//! Academic semester

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semester in which a course runs or an enrollment is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl Semester {
    /// All semesters in calendar order
    pub const ALL: [Self; 3] = [Self::Spring, Self::Summer, Self::Fall];

    /// Upper-case name used in CSV files and menus
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        }
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "FALL" => Ok(Self::Fall),
            _ => Err(format!("Unknown semester: {s}")),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("spring".parse::<Semester>(), Ok(Semester::Spring));
        assert_eq!("Summer".parse::<Semester>(), Ok(Semester::Summer));
        assert_eq!(" FALL ".parse::<Semester>(), Ok(Semester::Fall));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("WINTER".parse::<Semester>().is_err());
        assert!("".parse::<Semester>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for semester in Semester::ALL {
            assert_eq!(semester.to_string().parse::<Semester>(), Ok(semester));
        }
    }
}
