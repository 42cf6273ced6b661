//! Weekly grid shape.
//!
//! A school week is 5 ordered weekdays × 7 periods. Period 4 is a fixed
//! break; the remaining 6 periods per day carry real subjects.
//!
//! # Grid
//!
//! | Period | 1 | 2 | 3 | 4 | 5 | 6 | 7 |
//! |--------|---|---|---|---|---|---|---|
//! | Kind | subject | subject | subject | **Break** | subject | subject | subject |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of periods in one school day (break included).
pub const PERIODS_PER_DAY: u8 = 7;

/// The period that always holds [`Subject::Break`](super::Subject::Break).
pub const BREAK_PERIOD: u8 = 4;

/// Non-break periods per day.
pub const TEACHING_PERIODS_PER_DAY: usize = PERIODS_PER_DAY as usize - 1;

/// Slots in one section's week (5 × 7).
pub const SLOTS_PER_WEEK: usize = Weekday::ALL.len() * PERIODS_PER_DAY as usize;

/// A school weekday, in timetable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Zero-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Days from this one through Friday, inclusive.
    #[inline]
    pub fn remaining_days(self) -> usize {
        Self::ALL.len() - self.index()
    }

    /// Weekday name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Periods of a day, `1..=7`.
pub fn periods() -> impl Iterator<Item = u8> {
    1..=PERIODS_PER_DAY
}

/// Whether `period` is the fixed break.
#[inline]
pub fn is_break_period(period: u8) -> bool {
    period == BREAK_PERIOD
}
