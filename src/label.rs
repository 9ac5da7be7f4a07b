//! Categorical strength labels.

use std::fmt;
use std::str::FromStr;

use crate::error::StrengthError;
use crate::score::StrengthScore;

/// Highest score still rated [`StrengthLabel::Weak`].
const WEAK_MAX: i64 = 2;

/// Highest score still rated [`StrengthLabel::Moderate`].
const MODERATE_MAX: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        }
    }
}

/// Maps a raw score to a label.
///
/// Total over all integers: anything at or below 2 is `Weak`, 3 and 4 are
/// `Moderate`, 5 and above is `Strong`.
pub fn strength_label(score: i64) -> StrengthLabel {
    if score <= WEAK_MAX {
        StrengthLabel::Weak
    } else if score <= MODERATE_MAX {
        StrengthLabel::Moderate
    } else {
        StrengthLabel::Strong
    }
}

impl From<StrengthScore> for StrengthLabel {
    fn from(score: StrengthScore) -> Self {
        strength_label(i64::from(score))
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLabel {
    type Err = StrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(StrengthLabel::Weak),
            "moderate" => Ok(StrengthLabel::Moderate),
            "strong" => Ok(StrengthLabel::Strong),
            _ => Err(StrengthError::UnknownLabel(s.to_string())),
        }
    }
}
