//! Timetable construction.
//!
//! Builds each section's week period by period, then repairs duplicate
//! day layouts across sections.
//!
//! # Algorithm
//!
//! - [`SectionContext`] threads remaining quotas and the per-day subject
//!   set through one section's generation.
//! - [`select_subject`] picks a period's subject: a seeded shuffle of the
//!   candidates, first feasible wins, largest backlog as fallback.
//! - [`SectionScheduler`] walks days and periods, pins the break, repairs
//!   unfillable slots, and swaps late periods for odd-length identifiers.
//! - [`ensure_unique_layouts`] rotates day layouts that repeat another
//!   section's.
//! - [`TimetableGenerator`] runs the whole pipeline for a
//!   [`TimetableRequest`].

mod context;
mod generator;
mod section;
mod selector;
mod uniqueness;

pub use context::SectionContext;
pub use generator::{TimetableGenerator, TimetableRequest, DEFAULT_SECTIONS};
pub use section::SectionScheduler;
pub use selector::select_subject;
pub use uniqueness::ensure_unique_layouts;
