//! Single-section timetable construction.
//!
//! # Algorithm
//!
//! For each weekday in order, with `remaining_days = 5 - day_index`:
//! 1. Period 4 is always `Break` (no quota, not tracked in the day set).
//! 2. Every other period is filled by [`select_subject`]. If it finds no
//!    candidate, the first eligible subject in fixed order is placed
//!    instead; if none exists the section fails with
//!    [`TimetableError::Deadlock`].
//! 3. Sections whose identifier has odd length get periods 6 and 7 of the
//!    day swapped.
//!
//! # Complexity
//! O(d × p × s) where d=days, p=periods, s=subjects.

use rand::Rng;
use tracing::{debug, error, warn};

use super::context::SectionContext;
use super::selector::select_subject;
use crate::error::TimetableError;
use crate::models::{
    is_break_period, periods, SectionSchedule, Slot, Subject, Weekday, PERIODS_PER_DAY,
};
use crate::random::{section_seed, Mulberry32};

/// Periods exchanged for odd-length section identifiers.
const SWAPPED_PERIODS: (u8, u8) = (PERIODS_PER_DAY - 1, PERIODS_PER_DAY);

/// Builds one section's weekly timetable.
///
/// # Example
///
/// ```
/// use u_timetable::scheduler::SectionScheduler;
///
/// let schedule = SectionScheduler::new().schedule("A").unwrap();
/// assert_eq!(schedule.len(), 35);
/// assert_eq!(schedule.label(), "Section A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionScheduler;

impl SectionScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules a section with the generator seeded from its identifier.
    pub fn schedule(&self, section_id: &str) -> Result<SectionSchedule, TimetableError> {
        debug!(section = section_id, seed = section_seed(section_id), "scheduling section");
        self.schedule_with_rng(section_id, &mut Mulberry32::for_section(section_id))
    }

    /// Schedules a section drawing candidate orderings from `rng`.
    pub fn schedule_with_rng<R: Rng + ?Sized>(
        &self,
        section_id: &str,
        rng: &mut R,
    ) -> Result<SectionSchedule, TimetableError> {
        let mut schedule = SectionSchedule::new(section_id);
        let mut ctx = SectionContext::new();
        let swap_late_periods = section_id.encode_utf16().count() % 2 == 1;

        for day in Weekday::ALL {
            ctx.begin_day(day.remaining_days());

            for period in periods() {
                if is_break_period(period) {
                    schedule.push(Slot::new(day, period, Subject::Break));
                    continue;
                }
                let subject = match select_subject(rng, &ctx) {
                    Some(subject) => subject,
                    None => repair(&ctx, section_id, day, period)?,
                };
                ctx.place(subject);
                schedule.push(Slot::new(day, period, subject));
            }

            if swap_late_periods {
                schedule.swap_periods(day, SWAPPED_PERIODS.0, SWAPPED_PERIODS.1);
            }
        }

        if !ctx.is_exhausted() {
            warn!(section = section_id, "weekly quotas not fully consumed");
        }
        debug!(section = section_id, slots = schedule.len(), "section scheduled");
        Ok(schedule)
    }
}

/// Places the first eligible subject in fixed order.
fn repair(
    ctx: &SectionContext,
    section_id: &str,
    day: Weekday,
    period: u8,
) -> Result<Subject, TimetableError> {
    match ctx.eligible().next() {
        Some(subject) => {
            warn!(section = section_id, %day, period, %subject, "repairing unfillable slot");
            Ok(subject)
        }
        None => {
            error!(section = section_id, %day, period, "no subject can fill slot");
            Err(TimetableError::Deadlock {
                section: section_id.to_string(),
                day,
                period,
            })
        }
    }
}
