//! Deterministic weekly timetables for school sections.
//!
//! Assigns ten subjects to a 5-day × 7-period grid per section. Every
//! subject appears exactly three times a week and at most once a day,
//! period 4 is a fixed break, and the result is reproducible from the
//! section identifier alone.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `Weekday`, `Slot`,
//!   `SectionSchedule`, `ScheduleSet`, and the grid constants
//! - **`random`**: Seeded Mulberry32 generator
//! - **`scheduler`**: Slot selection, per-section construction,
//!   cross-section layout repair, and the `TimetableGenerator` entry point
//! - **`analysis`**: Frequency, balance, and compliance report
//! - **`validation`**: Section identifier checks
//!
//! # Example
//!
//! ```
//! use u_timetable::analysis::ScheduleAnalysis;
//! use u_timetable::scheduler::{TimetableGenerator, TimetableRequest};
//!
//! let set = TimetableGenerator::new()
//!     .generate(&TimetableRequest::new(["A", "B"]))
//!     .unwrap();
//! let json = set.to_json_pretty().unwrap();
//! assert!(json.contains("\"Section B\""));
//!
//! let analysis = ScheduleAnalysis::analyze(&set);
//! assert!(analysis.all_checks_pass());
//! ```

pub mod analysis;
pub mod error;
pub mod models;
pub mod random;
pub mod scheduler;
pub mod validation;

pub use error::TimetableError;
