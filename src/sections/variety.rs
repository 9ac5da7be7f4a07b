//! Character variety section - checks for lowercase, uppercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::{tally, SectionResult};
use crate::criteria::Criterion;

const VARIETY_CRITERIA: [Criterion; 4] = [
    Criterion::Lowercase,
    Criterion::Uppercase,
    Criterion::Digit,
    Criterion::Special,
];

/// Checks which ASCII character classes the password contains.
///
/// # Returns
/// One point per class present, with a hint for each missing class.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    tally(password.expose_secret(), &VARIETY_CRITERIA)
}
