//! Strength score: the number of criteria a password satisfies.

use std::fmt;

use crate::criteria::Criterion;
use crate::error::StrengthError;
use crate::label::StrengthLabel;

/// Integer strength score in `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MIN: StrengthScore = StrengthScore(0);
    pub const MAX: StrengthScore = StrengthScore(Criterion::ALL.len() as u8);

    pub(crate) fn new(value: u8) -> Self {
        debug_assert!(value <= Self::MAX.0);
        StrengthScore(value.min(Self::MAX.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> StrengthLabel {
        StrengthLabel::from(self)
    }
}

impl TryFrom<i64> for StrengthScore {
    type Error = StrengthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(StrengthScore(value as u8))
        } else {
            Err(StrengthError::OutOfRange(value))
        }
    }
}

impl TryFrom<u8> for StrengthScore {
    type Error = StrengthError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StrengthScore::try_from(i64::from(value))
    }
}

impl From<StrengthScore> for i64 {
    fn from(score: StrengthScore) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

/// Scores a password by counting the criteria it satisfies.
///
/// Every criterion is checked; there is no early exit. Any input is valid
/// and the empty string scores 0.
pub fn strength_score(password: &str) -> StrengthScore {
    let met = Criterion::ALL
        .iter()
        .filter(|criterion| criterion.is_met(password))
        .count();
    StrengthScore::new(met as u8)
}
