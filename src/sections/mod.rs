//! Password evaluation sections
//!
//! Each section checks a group of criteria and reports the points earned.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

use crate::criteria::Criterion;

/// Outcome of a single section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionResult {
    /// One point per criterion met.
    pub points: u8,
    /// Hints for every criterion that was not met, in criterion order.
    pub reasons: Vec<String>,
}

/// Checks `criteria` against `password`, awarding a point or a hint for each.
fn tally(password: &str, criteria: &[Criterion]) -> SectionResult {
    let mut result = SectionResult::default();
    for criterion in criteria {
        if criterion.is_met(password) {
            result.points += 1;
        } else {
            result.reasons.push(criterion.hint());
        }
    }
    result
}
