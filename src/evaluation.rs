//! Evaluation report returned to UI code.

use crate::label::StrengthLabel;
use crate::score::StrengthScore;

#[cfg(feature = "async")]
pub(crate) const CANCELLED_REASON: &str = "Evaluation cancelled";

/// Score plus the hints explaining how to raise it.
///
/// `score` is `None` when the evaluation was cancelled before completing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: Option<StrengthScore>,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    #[cfg(feature = "async")]
    pub(crate) fn cancelled() -> Self {
        PasswordEvaluation {
            score: None,
            reasons: vec![CANCELLED_REASON.to_string()],
        }
    }

    /// Label for the score, or `None` if no score was produced.
    pub fn strength(&self) -> Option<StrengthLabel> {
        self.score.map(StrengthScore::label)
    }

    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "async")]
    fn test_cancelled_has_no_strength() {
        let evaluation = PasswordEvaluation::cancelled();
        assert!(!evaluation.is_evaluated());
        assert_eq!(evaluation.strength(), None);
        assert_eq!(evaluation.reasons, vec![CANCELLED_REASON.to_string()]);
    }

    #[test]
    fn test_strength_follows_score() {
        let evaluation = PasswordEvaluation {
            score: StrengthScore::try_from(5i64).ok(),
            reasons: Vec::new(),
        };
        assert!(evaluation.is_evaluated());
        assert_eq!(evaluation.strength(), Some(StrengthLabel::Strong));
    }
}
