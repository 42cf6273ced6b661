//! Subject model.
//!
//! A closed set of ten teachable subjects plus the `Break` sentinel.
//! Declaration order is load-bearing: it is the iteration order used by
//! the scheduler's repair path and the key order of frequency reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekly occurrences required of every real subject (30 slots / 10 subjects).
pub const WEEKLY_QUOTA: u8 = 3;

/// A timetable subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
    Biology,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    English,
    History,
    Geography,
    Economics,
    Bengali,
    /// Fixed mid-day break. Never counted against a quota.
    Break,
}

impl Subject {
    /// The ten real subjects, in fixed order.
    pub const REAL: [Subject; 10] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Mathematics,
        Subject::Biology,
        Subject::ComputerScience,
        Subject::English,
        Subject::History,
        Subject::Geography,
        Subject::Economics,
        Subject::Bengali,
    ];

    /// Number of real subjects.
    pub const COUNT: usize = Self::REAL.len();

    /// Position in [`Subject::REAL`]. `None` for `Break`.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Subject::Break => None,
            s => Some(s as usize),
        }
    }

    /// Whether this is the break sentinel.
    #[inline]
    pub fn is_break(self) -> bool {
        self == Subject::Break
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
            Subject::Biology => "Biology",
            Subject::ComputerScience => "Computer Science",
            Subject::English => "English",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Economics => "Economics",
            Subject::Bengali => "Bengali",
            Subject::Break => "Break",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_subjects_indexed_in_order() {
        for (i, s) in Subject::REAL.iter().enumerate() {
            assert_eq!(s.index(), Some(i));
            assert!(!s.is_break());
        }
        assert_eq!(Subject::Break.index(), None);
        assert!(Subject::Break.is_break());
    }

    #[test]
    fn test_subject_serializes_as_display_name() {
        let json = serde_json::to_string(&Subject::ComputerScience).unwrap();
        assert_eq!(json, "\"Computer Science\"");
        let back: Subject = serde_json::from_str("\"Break\"").unwrap();
        assert_eq!(back, Subject::Break);
        assert!(serde_json::from_str::<Subject>("\"Art\"").is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for s in Subject::REAL {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{s}\""));
        }
    }
}
