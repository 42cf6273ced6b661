//! Per-section scheduling state.

use crate::models::{Subject, TEACHING_PERIODS_PER_DAY, WEEKLY_QUOTA};

/// Scratch state threaded through one section's generation.
///
/// Holds each subject's remaining weekly quota and the set of subjects
/// already placed today. Created fresh per section; the day set is
/// cleared at the start of every day.
#[derive(Debug, Clone)]
pub struct SectionContext {
    remaining: [u8; Subject::COUNT],
    placed_today: [bool; Subject::COUNT],
    periods_filled_today: usize,
    remaining_days: usize,
}

impl SectionContext {
    /// Full quotas, Monday morning.
    pub fn new() -> Self {
        Self::with_quota(WEEKLY_QUOTA)
    }

    /// Every real subject starts at `quota`.
    pub fn with_quota(quota: u8) -> Self {
        Self {
            remaining: [quota; Subject::COUNT],
            placed_today: [false; Subject::COUNT],
            periods_filled_today: 0,
            remaining_days: 0,
        }
    }

    /// Starts a new day with `remaining_days` days left, today included.
    pub fn begin_day(&mut self, remaining_days: usize) {
        self.placed_today = [false; Subject::COUNT];
        self.periods_filled_today = 0;
        self.remaining_days = remaining_days;
    }

    /// Days left in the week, today included.
    #[inline]
    pub fn remaining_days(&self) -> usize {
        self.remaining_days
    }

    /// Remaining weekly occurrences of a subject. Zero for `Break`.
    #[inline]
    pub fn remaining(&self, subject: Subject) -> u8 {
        subject.index().map_or(0, |i| self.remaining[i])
    }

    /// Whether the subject has already been placed today.
    #[inline]
    pub fn placed_today(&self, subject: Subject) -> bool {
        subject.index().is_some_and(|i| self.placed_today[i])
    }

    /// Subjects still owed this week and not yet placed today, in fixed order.
    pub fn eligible(&self) -> impl Iterator<Item = Subject> + '_ {
        Subject::REAL
            .into_iter()
            .filter(move |&s| self.remaining(s) > 0 && !self.placed_today(s))
    }

    /// Records a placement: marks the subject used today and consumes one
    /// occurrence of its quota.
    pub fn place(&mut self, subject: Subject) {
        if let Some(i) = subject.index() {
            self.placed_today[i] = true;
            self.remaining[i] = self.remaining[i].saturating_sub(1);
            self.periods_filled_today += 1;
        }
    }

    /// Whether every subject's quota has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.iter().all(|&r| r == 0)
    }

    /// Whether the rest of the week stays completable if `candidate` is
    /// placed in the current period.
    ///
    /// First applies the per-subject bound (no subject may still need more
    /// occurrences than there are days left), then looks ahead within the
    /// day: subjects already used today must fit in the remaining days,
    /// and subjects that must still appear today must fit in today's
    /// remaining periods.
    pub fn is_feasible_after(&self, candidate: Subject) -> bool {
        let Some(ci) = candidate.index() else {
            return false;
        };
        let days = self.remaining_days;
        let after = |i: usize| -> usize {
            let r = usize::from(self.remaining[i]);
            if i == ci {
                r.saturating_sub(1)
            } else {
                r
            }
        };

        if (0..Subject::COUNT).any(|i| after(i) > days) {
            return false;
        }

        let later_days = days.saturating_sub(1);
        let periods_left = TEACHING_PERIODS_PER_DAY.saturating_sub(self.periods_filled_today + 1);
        let mut must_place_today = 0;
        let mut placeable_today = 0;
        for i in 0..Subject::COUNT {
            let used = self.placed_today[i] || i == ci;
            let r = after(i);
            if used {
                if r > later_days {
                    return false;
                }
            } else if r > 0 {
                placeable_today += 1;
                if r > later_days {
                    must_place_today += 1;
                }
            }
        }
        must_place_today <= periods_left && placeable_today >= periods_left
    }
}

impl Default for SectionContext {
    fn default() -> Self {
        Self::new()
    }
}
