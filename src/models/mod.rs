//! Timetable domain models.
//!
//! Provides the fixed weekly grid, the closed subject set, and the
//! per-section and multi-section timetable types.
//!
//! # Domain Mappings
//!
//! | u-timetable | School |
//! |-------------|--------|
//! | Section | Class / cohort |
//! | Slot | One lesson cell (day × period) |
//! | SectionSchedule | A class's weekly timetable |
//! | ScheduleSet | The timetables of every class generated together |

mod calendar;
mod schedule;
mod subject;

pub use calendar::{
    is_break_period, periods, Weekday, BREAK_PERIOD, PERIODS_PER_DAY, SLOTS_PER_WEEK,
    TEACHING_PERIODS_PER_DAY,
};
pub use schedule::{section_label, ScheduleSet, SectionSchedule, Slot, SECTION_LABEL_PREFIX};
pub use subject::{Subject, WEEKLY_QUOTA};
