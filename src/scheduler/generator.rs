//! Timetable generation entry point.
//!
//! Schedules every requested section independently, each from its own
//! seeded generator, then repairs duplicate day layouts across sections.
//! Every call builds a fresh [`ScheduleSet`]; nothing carries over between
//! runs.

use tracing::{debug, info};

use super::section::SectionScheduler;
use super::uniqueness::ensure_unique_layouts;
use crate::error::TimetableError;
use crate::models::ScheduleSet;
use crate::validation::validate_sections;

/// Sections used when the caller does not name any.
pub const DEFAULT_SECTIONS: [&str; 4] = ["A", "B", "C", "D"];

/// Input container for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRequest {
    /// Section identifiers, in output order.
    pub sections: Vec<String>,
}

impl TimetableRequest {
    /// Creates a request for the given sections.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a section.
    pub fn with_section(mut self, section_id: impl Into<String>) -> Self {
        self.sections.push(section_id.into());
        self
    }
}

impl Default for TimetableRequest {
    fn default() -> Self {
        Self::new(DEFAULT_SECTIONS)
    }
}

/// Generates timetables for a set of sections.
///
/// # Example
///
/// ```
/// use u_timetable::scheduler::{TimetableGenerator, TimetableRequest};
///
/// let request = TimetableRequest::new(["A", "B"]);
/// let set = TimetableGenerator::new().generate(&request).unwrap();
/// assert_eq!(set.labels(), vec!["Section A", "Section B"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    scheduler: SectionScheduler,
}

impl TimetableGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the request, schedules each section, and separates
    /// duplicate day layouts.
    pub fn generate(&self, request: &TimetableRequest) -> Result<ScheduleSet, TimetableError> {
        validate_sections(request.sections.as_slice()).map_err(TimetableError::InvalidRequest)?;
        info!(sections = request.sections.len(), "generating timetables");

        let mut set = ScheduleSet::new();
        for section_id in &request.sections {
            set.insert(self.scheduler.schedule(section_id)?);
        }

        let rotations = ensure_unique_layouts(&mut set);
        debug!(rotations, "cross-section layout repair done");
        Ok(set)
    }
}
