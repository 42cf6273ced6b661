//! Timetable (solution) model.
//!
//! A [`SectionSchedule`] is one section's week: 35 slots ordered by day,
//! then period. A [`ScheduleSet`] groups the schedules of every requested
//! section, keyed by display label and kept in request order.
//!
//! # Document format
//!
//! ```json
//! {
//!   "Section A": [
//!     { "day": "Monday", "period": 1, "subject": "Physics" },
//!     { "day": "Monday", "period": 4, "subject": "Break" }
//!   ]
//! }
//! ```

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::calendar::{is_break_period, Weekday, SLOTS_PER_WEEK};
use super::subject::Subject;
use crate::error::TimetableError;

/// Prefix of every section's display label (`"Section A"`).
pub const SECTION_LABEL_PREFIX: &str = "Section ";

/// One (day, period) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: Weekday,
    /// Period number, `1..=7`.
    pub period: u8,
    pub subject: Subject,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Weekday, period: u8, subject: Subject) -> Self {
        Self {
            day,
            period,
            subject,
        }
    }
}

/// One section's weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSchedule {
    /// Section identifier (`"A"`).
    pub section_id: String,
    /// Slots, day-major then period order when produced by the scheduler.
    pub slots: Vec<Slot>,
}

impl SectionSchedule {
    /// Creates an empty schedule for a section.
    pub fn new(section_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            slots: Vec::with_capacity(SLOTS_PER_WEEK),
        }
    }

    /// Display label, `"Section <id>"`.
    pub fn label(&self) -> String {
        section_label(&self.section_id)
    }

    /// Appends a slot.
    pub fn push(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slots have been placed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the schedule covers the full week.
    pub fn is_complete(&self) -> bool {
        self.slots.len() == SLOTS_PER_WEEK
    }

    /// Slots of one day, in stored order.
    pub fn day_slots(&self, day: Weekday) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| s.day == day)
    }

    /// Subject at a given cell.
    pub fn subject_at(&self, day: Weekday, period: u8) -> Option<Subject> {
        self.slots
            .iter()
            .find(|s| s.day == day && s.period == period)
            .map(|s| s.subject)
    }

    /// Overwrites the subject at a cell. Returns `false` if the cell is absent.
    pub fn set_subject(&mut self, day: Weekday, period: u8, subject: Subject) -> bool {
        match self
            .slots
            .iter_mut()
            .find(|s| s.day == day && s.period == period)
        {
            Some(slot) => {
                slot.subject = subject;
                true
            }
            None => false,
        }
    }

    /// Exchanges the subjects of two periods on one day.
    ///
    /// No-op if either cell is absent.
    pub fn swap_periods(&mut self, day: Weekday, a: u8, b: u8) {
        let (Some(sa), Some(sb)) = (self.subject_at(day, a), self.subject_at(day, b)) else {
            return;
        };
        self.set_subject(day, a, sb);
        self.set_subject(day, b, sa);
    }

    /// Ordered non-break subjects of one day, periods ascending.
    pub fn day_signature(&self, day: Weekday) -> Vec<Subject> {
        self.teaching_slot_indices(day)
            .into_iter()
            .map(|i| self.slots[i].subject)
            .collect()
    }

    /// Rotates a day's non-break subjects one position later.
    ///
    /// The last period's subject moves to the first non-break period.
    pub fn rotate_day_right(&mut self, day: Weekday) {
        let indices = self.teaching_slot_indices(day);
        if indices.len() < 2 {
            return;
        }
        let mut subjects: Vec<Subject> = indices.iter().map(|&i| self.slots[i].subject).collect();
        subjects.rotate_right(1);
        for (&i, subject) in indices.iter().zip(subjects) {
            self.slots[i].subject = subject;
        }
    }

    /// Weekly occurrence count of every real subject (zero-filled).
    pub fn subject_counts(&self) -> BTreeMap<Subject, u32> {
        let mut counts: BTreeMap<Subject, u32> = Subject::REAL.iter().map(|&s| (s, 0)).collect();
        for slot in &self.slots {
            if !slot.subject.is_break() {
                *counts.entry(slot.subject).or_insert(0) += 1;
            }
        }
        counts
    }

    fn teaching_slot_indices(&self, day: Weekday) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.day == day && !is_break_period(s.period))
            .map(|(i, _)| i)
            .collect();
        indices.sort_by_key(|&i| self.slots[i].period);
        indices
    }
}

/// Display label for a section identifier.
pub fn section_label(section_id: &str) -> String {
    format!("{SECTION_LABEL_PREFIX}{section_id}")
}

/// Schedules for every requested section, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSet {
    sections: Vec<SectionSchedule>,
}

impl ScheduleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section schedule, replacing any existing one with the same id.
    pub fn insert(&mut self, schedule: SectionSchedule) {
        match self
            .sections
            .iter_mut()
            .find(|s| s.section_id == schedule.section_id)
        {
            Some(existing) => *existing = schedule,
            None => self.sections.push(schedule),
        }
    }

    /// Looks up a schedule by display label (`"Section A"`).
    pub fn get(&self, label: &str) -> Option<&SectionSchedule> {
        self.sections.iter().find(|s| s.label() == label)
    }

    /// Looks up a schedule by section identifier (`"A"`).
    pub fn get_section(&self, section_id: &str) -> Option<&SectionSchedule> {
        self.sections.iter().find(|s| s.section_id == section_id)
    }

    /// Display labels in order.
    pub fn labels(&self) -> Vec<String> {
        self.sections.iter().map(SectionSchedule::label).collect()
    }

    /// Iterates schedules in order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionSchedule> {
        self.sections.iter()
    }

    /// Schedules as a mutable slice, in order.
    pub fn sections_mut(&mut self) -> &mut [SectionSchedule] {
        &mut self.sections
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Compact JSON document.
    pub fn to_json(&self) -> Result<String, TimetableError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON document.
    pub fn to_json_pretty(&self) -> Result<String, TimetableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a JSON document produced by [`ScheduleSet::to_json`].
    pub fn from_json(json: &str) -> Result<Self, TimetableError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for ScheduleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.label(), &section.slots)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScheduleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ScheduleSetVisitor)
    }
}

struct ScheduleSetVisitor;

impl<'de> Visitor<'de> for ScheduleSetVisitor {
    type Value = ScheduleSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of section label to slot records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut set = ScheduleSet::new();
        while let Some((label, slots)) = map.next_entry::<String, Vec<Slot>>()? {
            let section_id = label
                .strip_prefix(SECTION_LABEL_PREFIX)
                .unwrap_or(&label)
                .to_string();
            set.insert(SectionSchedule { section_id, slots });
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::periods;

    fn day_of(subjects: [Subject; 6]) -> Vec<Subject> {
        let mut day = subjects.to_vec();
        day.insert(3, Subject::Break);
        day
    }

    fn sample_schedule(id: &str) -> SectionSchedule {
        use Subject::*;
        let mut s = SectionSchedule::new(id);
        let monday = day_of([Physics, Chemistry, Mathematics, Biology, English, History]);
        for (period, subject) in periods().zip(monday) {
            s.push(Slot::new(Weekday::Monday, period, subject));
        }
        s
    }

    #[test]
    fn test_label() {
        assert_eq!(sample_schedule("A").label(), "Section A");
        assert_eq!(section_label("B2"), "Section B2");
    }

    #[test]
    fn test_day_signature_skips_break() {
        use Subject::*;
        let s = sample_schedule("A");
        assert_eq!(
            s.day_signature(Weekday::Monday),
            vec![Physics, Chemistry, Mathematics, Biology, English, History]
        );
        assert!(s.day_signature(Weekday::Tuesday).is_empty());
    }

    #[test]
    fn test_day_signature_orders_by_period() {
        use Subject::*;
        let mut s = SectionSchedule::new("A");
        s.push(Slot::new(Weekday::Monday, 3, Biology));
        s.push(Slot::new(Weekday::Monday, 1, Physics));
        s.push(Slot::new(Weekday::Monday, 4, Break));
        s.push(Slot::new(Weekday::Monday, 2, English));
        assert_eq!(s.day_signature(Weekday::Monday), vec![Physics, English, Biology]);
    }

    #[test]
    fn test_rotate_day_right() {
        use Subject::*;
        let mut s = sample_schedule("A");
        s.rotate_day_right(Weekday::Monday);
        assert_eq!(
            s.day_signature(Weekday::Monday),
            vec![History, Physics, Chemistry, Mathematics, Biology, English]
        );
        assert_eq!(s.subject_at(Weekday::Monday, 4), Some(Break));
    }

    #[test]
    fn test_swap_periods() {
        use Subject::*;
        let mut s = sample_schedule("A");
        s.swap_periods(Weekday::Monday, 6, 7);
        assert_eq!(s.subject_at(Weekday::Monday, 6), Some(History));
        assert_eq!(s.subject_at(Weekday::Monday, 7), Some(English));

        // Absent cells leave the schedule untouched.
        let before = s.clone();
        s.swap_periods(Weekday::Friday, 6, 7);
        assert_eq!(s, before);
    }

    #[test]
    fn test_subject_counts_zero_filled() {
        let counts = sample_schedule("A").subject_counts();
        assert_eq!(counts.len(), Subject::COUNT);
        assert_eq!(counts[&Subject::Physics], 1);
        assert_eq!(counts[&Subject::Bengali], 0);
        assert!(!counts.contains_key(&Subject::Break));
    }

    #[test]
    fn test_insert_replaces_same_section() {
        let mut set = ScheduleSet::new();
        set.insert(sample_schedule("A"));
        set.insert(sample_schedule("B"));
        set.insert(SectionSchedule::new("A"));
        assert_eq!(set.labels(), vec!["Section A", "Section B"]);
        assert!(set.get("Section A").unwrap().is_empty());
        assert_eq!(set.get_section("B").unwrap().len(), 7);
        assert!(set.get("Section C").is_none());
    }

    #[test]
    fn test_document_shape() {
        let mut set = ScheduleSet::new();
        set.insert(sample_schedule("A"));
        let value: serde_json::Value = serde_json::from_str(&set.to_json().unwrap()).unwrap();
        let first = &value["Section A"][0];
        assert_eq!(first["day"], "Monday");
        assert_eq!(first["period"], 1);
        assert_eq!(first["subject"], "Physics");
        assert_eq!(value["Section A"][3]["subject"], "Break");
    }

    #[test]
    fn test_document_preserves_request_order() {
        let mut set = ScheduleSet::new();
        for id in ["Z", "A", "M"] {
            set.insert(sample_schedule(id));
        }
        let json = set.to_json_pretty().unwrap();
        let parsed = ScheduleSet::from_json(&json).unwrap();
        assert_eq!(parsed.labels(), vec!["Section Z", "Section A", "Section M"]);
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_from_json_rejects_unknown_subject() {
        let json = r#"{"Section A":[{"day":"Monday","period":1,"subject":"Art"}]}"#;
        assert!(matches!(
            ScheduleSet::from_json(json),
            Err(TimetableError::Serialization(_))
        ));
    }
}
