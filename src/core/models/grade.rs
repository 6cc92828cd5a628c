//! Letter grades and the mark → grade derivation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest mark that earns an `S`
pub const S_MIN_MARKS: f64 = 90.0;
/// Lowest mark that earns an `A`
pub const A_MIN_MARKS: f64 = 80.0;
/// Lowest mark that earns a `B`
pub const B_MIN_MARKS: f64 = 70.0;
/// Lowest mark that earns a `C`
pub const C_MIN_MARKS: f64 = 60.0;
/// Lowest mark that earns a `D`
pub const D_MIN_MARKS: f64 = 50.0;
/// Lowest mark that earns an `E`; anything below is an `F`
pub const E_MIN_MARKS: f64 = 40.0;

/// Final grade attached to an enrollment.
///
/// Variants are declared best-first, so the derived ordering sorts `S` before `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// 90–100, 10 points
    S,
    /// 80–89, 9 points
    A,
    /// 70–79, 8 points
    B,
    /// 60–69, 7 points
    C,
    /// 50–59, 6 points
    D,
    /// 40–49, 5 points
    E,
    /// below 40, 0 points
    F,
}

/// Lower mark bound for each passing grade, highest first
const THRESHOLDS: [(f64, Grade); 6] = [
    (S_MIN_MARKS, Grade::S),
    (A_MIN_MARKS, Grade::A),
    (B_MIN_MARKS, Grade::B),
    (C_MIN_MARKS, Grade::C),
    (D_MIN_MARKS, Grade::D),
    (E_MIN_MARKS, Grade::E),
];

impl Grade {
    /// All grades, best first
    pub const ALL: [Self; 7] = [
        Self::S,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// Grade points used in GPA computation
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::S => 10,
            Self::A => 9,
            Self::B => 8,
            Self::C => 7,
            Self::D => 6,
            Self::E => 5,
            Self::F => 0,
        }
    }

    /// Derive a grade from a numeric mark.
    ///
    /// The mapping is total: marks are not range-checked, so anything at or above
    /// 90 is an `S` and anything below 40 (including negatives and NaN) is an `F`.
    #[must_use]
    pub fn from_marks(marks: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| marks >= *min)
            .map_or(Self::F, |(_, grade)| *grade)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_marks_boundaries() {
        assert_eq!(Grade::from_marks(100.0), Grade::S);
        assert_eq!(Grade::from_marks(90.0), Grade::S);
        assert_eq!(Grade::from_marks(89.99), Grade::A);
        assert_eq!(Grade::from_marks(80.0), Grade::A);
        assert_eq!(Grade::from_marks(79.0), Grade::B);
        assert_eq!(Grade::from_marks(70.0), Grade::B);
        assert_eq!(Grade::from_marks(69.0), Grade::C);
        assert_eq!(Grade::from_marks(60.0), Grade::C);
        assert_eq!(Grade::from_marks(59.0), Grade::D);
        assert_eq!(Grade::from_marks(50.0), Grade::D);
        assert_eq!(Grade::from_marks(49.0), Grade::E);
        assert_eq!(Grade::from_marks(40.0), Grade::E);
        assert_eq!(Grade::from_marks(39.0), Grade::F);
        assert_eq!(Grade::from_marks(0.0), Grade::F);
    }

    #[test]
    fn test_out_of_range_marks_still_map() {
        assert_eq!(Grade::from_marks(120.0), Grade::S);
        assert_eq!(Grade::from_marks(-5.0), Grade::F);
        assert_eq!(Grade::from_marks(f64::NAN), Grade::F);
    }

    #[test]
    fn test_points() {
        let points: Vec<u32> = Grade::ALL.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![10, 9, 8, 7, 6, 5, 0]);
    }

    #[test]
    fn test_ordering_is_best_first() {
        assert!(Grade::S < Grade::A);
        assert!(Grade::E < Grade::F);
    }
}
