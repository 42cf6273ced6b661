//! Cross-section layout repair.
//!
//! Two sections must not present the same ordered non-break subjects on
//! the same weekday. Sections are compared pairwise in request order; when
//! section `j` repeats section `i`'s day, `j`'s day is rotated right by one
//! period. Rotation keeps the day's subject multiset, so quotas and the
//! one-per-day rule still hold.
//!
//! This is a single pass. A rotation is not re-checked against sections
//! already compared, so collisions among three or more sections can
//! survive.

use tracing::debug;

use crate::models::{ScheduleSet, Weekday};

/// Rotates colliding day layouts. Returns the number of rotations applied.
pub fn ensure_unique_layouts(set: &mut ScheduleSet) -> usize {
    let sections = set.sections_mut();
    let mut rotations = 0;

    for i in 0..sections.len() {
        for j in (i + 1)..sections.len() {
            for day in Weekday::ALL {
                if sections[i].day_signature(day) != sections[j].day_signature(day) {
                    continue;
                }
                debug!(
                    kept = %sections[i].section_id,
                    rotated = %sections[j].section_id,
                    %day,
                    "rotating duplicate day layout"
                );
                sections[j].rotate_day_right(day);
                rotations += 1;
            }
        }
    }

    rotations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionSchedule;
    use crate::scheduler::SectionScheduler;

    fn renamed(base: &SectionSchedule, id: &str) -> SectionSchedule {
        let mut s = base.clone();
        s.section_id = id.to_string();
        s
    }

    fn rotated_twice(base: &SectionSchedule, id: &str) -> SectionSchedule {
        let mut s = renamed(base, id);
        for day in Weekday::ALL {
            s.rotate_day_right(day);
            s.rotate_day_right(day);
        }
        s
    }

    fn base() -> SectionSchedule {
        SectionScheduler::new().schedule("A").unwrap()
    }

    #[test]
    fn test_identical_pair_is_separated() {
        let base = base();
        let mut set = ScheduleSet::new();
        set.insert(renamed(&base, "A"));
        set.insert(renamed(&base, "B"));

        assert_eq!(ensure_unique_layouts(&mut set), 5);

        let a = set.get_section("A").unwrap();
        let b = set.get_section("B").unwrap();
        assert_eq!(a, &base);
        for day in Weekday::ALL {
            assert_ne!(a.day_signature(day), b.day_signature(day));
            let mut sa = a.day_signature(day);
            let mut sb = b.day_signature(day);
            sa.sort();
            sb.sort();
            assert_eq!(sa, sb);
        }
        assert_eq!(a.subject_counts(), b.subject_counts());
    }

    #[test]
    fn test_distinct_sections_untouched() {
        let base = base();
        let mut set = ScheduleSet::new();
        set.insert(renamed(&base, "A"));
        set.insert(rotated_twice(&base, "B"));
        let before = set.clone();

        assert_eq!(ensure_unique_layouts(&mut set), 0);
        assert_eq!(set, before);
    }

    #[test]
    fn test_single_pass_can_leave_collision() {
        // W = rot²(X); the three X copies are pushed to X, rot(X), rot²(X),
        // and the last one now repeats W, which was compared earlier.
        let base = base();
        let mut set = ScheduleSet::new();
        set.insert(rotated_twice(&base, "W"));
        set.insert(renamed(&base, "X"));
        set.insert(renamed(&base, "Y"));
        set.insert(renamed(&base, "Z"));

        ensure_unique_layouts(&mut set);

        let w = set.get_section("W").unwrap();
        let z = set.get_section("Z").unwrap();
        for day in Weekday::ALL {
            assert_eq!(w.day_signature(day), z.day_signature(day));
        }
    }

    #[test]
    fn test_empty_and_single_sets() {
        let mut empty = ScheduleSet::new();
        assert_eq!(ensure_unique_layouts(&mut empty), 0);

        let mut single = ScheduleSet::new();
        single.insert(base());
        assert_eq!(ensure_unique_layouts(&mut single), 0);
    }
}
