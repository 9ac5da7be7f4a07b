//! Length section - awards a point at 8 and another at 12 characters.

use secrecy::{ExposeSecret, SecretString};

use super::{tally, SectionResult};
use crate::criteria::Criterion;

const LENGTH_CRITERIA: [Criterion; 2] = [Criterion::MinLength, Criterion::ExtendedLength];

/// Checks the password length thresholds.
///
/// # Returns
/// Up to 2 points, with a hint for each threshold not reached.
pub fn length_section(password: &SecretString) -> SectionResult {
    tally(password.expose_secret(), &LENGTH_CRITERIA)
}
