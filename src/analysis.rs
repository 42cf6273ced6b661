//! Timetable quality report.
//!
//! Read-only metrics over a finished [`ScheduleSet`]; nothing here feeds
//! back into generation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Frequency | Weekly occurrences of each real subject, per section |
//! | Balance | `100 − round(100 × Σ|count − 3| / 30)`, per section |
//! | No consecutive duplicates | No two adjacent non-break periods share a subject |
//! | No empty slots | Every non-break period holds a real subject, the break holds `Break` |
//! | Unique daily layouts | No two sections share a day's ordered non-break subjects |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{
    is_break_period, periods, ScheduleSet, SectionSchedule, Subject, Weekday, WEEKLY_QUOTA,
};

/// Per-section frequency and balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    /// Display label (`"Section A"`).
    pub label: String,
    /// Weekly count of each real subject, in subject order.
    pub frequency: BTreeMap<Subject, u32>,
    /// Balance score; 100 when every subject meets its quota exactly.
    pub balance_score: i32,
}

/// Constraint compliance across the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceChecks {
    pub no_consecutive_duplicates: bool,
    pub no_empty_slots: bool,
    pub unique_daily_layouts: bool,
}

/// Timetable quality report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleAnalysis {
    /// Reports in section order.
    pub sections: Vec<SectionReport>,
    pub checks: ComplianceChecks,
}

impl ScheduleAnalysis {
    /// Analyzes a schedule set.
    pub fn analyze(set: &ScheduleSet) -> Self {
        let sections = set
            .iter()
            .map(|s| {
                let frequency = s.subject_counts();
                SectionReport {
                    label: s.label(),
                    balance_score: balance_score(&frequency),
                    frequency,
                }
            })
            .collect();

        let checks = ComplianceChecks {
            no_consecutive_duplicates: set.iter().all(has_no_consecutive_duplicates),
            no_empty_slots: set.iter().all(has_no_empty_slots),
            unique_daily_layouts: has_unique_daily_layouts(set),
        };

        Self { sections, checks }
    }

    /// Whether every compliance check passed.
    pub fn all_checks_pass(&self) -> bool {
        let c = self.checks;
        c.no_consecutive_duplicates && c.no_empty_slots && c.unique_daily_layouts
    }

    /// Lowest balance score. `None` for an empty set.
    pub fn min_balance(&self) -> Option<i32> {
        self.sections.iter().map(|r| r.balance_score).min()
    }

    /// Balance score of one section by label.
    pub fn balance_of(&self, label: &str) -> Option<i32> {
        self.sections
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.balance_score)
    }

    /// Whether all checks pass and every section scores at least `min_balance`.
    pub fn meets_threshold(&self, min_balance: i32) -> bool {
        self.all_checks_pass() && self.min_balance().map_or(true, |b| b >= min_balance)
    }
}

/// Balance score for a frequency table.
///
/// Subjects missing from `frequency` count as zero occurrences.
pub fn balance_score(frequency: &BTreeMap<Subject, u32>) -> i32 {
    let quota = i64::from(WEEKLY_QUOTA);
    let deviation: i64 = Subject::REAL
        .iter()
        .map(|s| (i64::from(frequency.get(s).copied().unwrap_or(0)) - quota).abs())
        .sum();
    let max_deviation = (Subject::COUNT as i64 * quota) as f64;
    100 - (100.0 * deviation as f64 / max_deviation).round() as i32
}

fn has_no_consecutive_duplicates(schedule: &SectionSchedule) -> bool {
    Weekday::ALL.iter().all(|&day| {
        let mut slots: Vec<_> = schedule.day_slots(day).collect();
        slots.sort_by_key(|s| s.period);
        slots.windows(2).all(|w| {
            let (a, b) = (w[0].subject, w[1].subject);
            a.is_break() || b.is_break() || a != b
        })
    })
}

fn has_no_empty_slots(schedule: &SectionSchedule) -> bool {
    Weekday::ALL.iter().all(|&day| {
        periods().all(|period| match schedule.subject_at(day, period) {
            Some(subject) => subject.is_break() == is_break_period(period),
            None => false,
        })
    })
}

fn has_unique_daily_layouts(set: &ScheduleSet) -> bool {
    let sections: Vec<&SectionSchedule> = set.iter().collect();
    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            for day in Weekday::ALL {
                let sig = a.day_signature(day);
                if !sig.is_empty() && sig == b.day_signature(day) {
                    return false;
                }
            }
        }
    }
    true
}
