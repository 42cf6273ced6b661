//! Slot selection.
//!
//! # Algorithm
//!
//! 1. Candidates = subjects still owed this week and not yet placed today.
//! 2. Shuffle the candidates with the section's generator.
//! 3. Return the first candidate whose placement keeps the week completable
//!    (see [`SectionContext::is_feasible_after`]).
//! 4. Otherwise fall back to the candidate with the largest remaining quota,
//!    earliest in shuffled order on ties.
//!
//! Returns `None` only when there are no candidates at all.

use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use super::context::SectionContext;
use crate::models::Subject;

/// Picks the subject for the current period.
pub fn select_subject<R: Rng + ?Sized>(rng: &mut R, ctx: &SectionContext) -> Option<Subject> {
    let mut candidates: Vec<Subject> = ctx.eligible().collect();
    if candidates.is_empty() {
        return None;
    }
    candidates.shuffle(rng);

    if let Some(&subject) = candidates.iter().find(|&&c| ctx.is_feasible_after(c)) {
        return Some(subject);
    }

    let fallback = candidates
        .iter()
        .copied()
        .min_by_key(|&c| Reverse(ctx.remaining(c)))?;
    warn!(
        subject = %fallback,
        remaining_days = ctx.remaining_days(),
        "no feasible candidate; placing most backlogged subject"
    );
    Some(fallback)
}
