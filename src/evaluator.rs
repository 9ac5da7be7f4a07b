//! Password strength evaluator - runs the sections and builds the report.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluation::PasswordEvaluation;
use crate::score::StrengthScore;
use crate::sections::{character_variety_section, length_section, SectionResult};

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

type Section = fn(&SecretString) -> SectionResult;

const SECTIONS: [(&str, Section); 2] = [
    ("length", length_section),
    ("variety", character_variety_section),
];

/// Evaluates password strength and returns a detailed evaluation.
///
/// The score always matches [`strength_score`](crate::strength_score) for
/// the same text; `reasons` lists a hint for every unmet criterion.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token, checked before each section (async feature only)
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let mut reasons = Vec::new();
    let mut points: u8 = 0;

    for (_section_name, section_fn) in SECTIONS {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(|t| t.is_cancelled()) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Evaluation cancelled before section: {}", _section_name);
                return PasswordEvaluation::cancelled();
            }
        }

        let result = section_fn(password);
        points += result.points;
        reasons.extend(result.reasons);
    }

    let score = StrengthScore::new(points);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: score {} ({}), {} hints",
        score,
        score.label(),
        reasons.len()
    );

    PasswordEvaluation {
        score: Some(score),
        reasons,
    }
}

/// Debounced version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled before a score is
/// produced, a newer input has superseded this one and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    let evaluation = evaluate_password_strength(password, Some(token));

    if !evaluation.is_evaluated() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Debounced evaluation superseded, skipping");
        return;
    }

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::StrengthLabel;
    use crate::score::strength_score;

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        let pwd = SecretString::new(pwd.to_string().into());

        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&pwd, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&pwd);

        evaluation
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.score.map(|s| s.value()), Some(0));
        assert_eq!(evaluation.strength(), Some(StrengthLabel::Weak));
        assert_eq!(evaluation.reasons.len(), 6);
    }

    #[test]
    fn test_evaluate_weak_password() {
        let evaluation = evaluate("abcdefgh");
        assert_eq!(evaluation.score.map(|s| s.value()), Some(2));
        assert_eq!(evaluation.strength(), Some(StrengthLabel::Weak));
    }

    #[test]
    fn test_evaluate_moderate_password() {
        let evaluation = evaluate("abcdefghijkl");
        assert_eq!(evaluation.score.map(|s| s.value()), Some(3));
        assert_eq!(evaluation.strength(), Some(StrengthLabel::Moderate));
        assert_eq!(evaluation.reasons.len(), 3);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate("Abcdefgh1!");
        assert_eq!(evaluation.score.map(|s| s.value()), Some(5));
        assert_eq!(evaluation.strength(), Some(StrengthLabel::Strong));
        assert_eq!(evaluation.reasons.len(), 1);
        assert!(evaluation.reasons[0].contains("12"));
    }

    #[test]
    fn test_evaluate_perfect_password() {
        let evaluation = evaluate("Ab1!Ab1!Ab1!");
        assert_eq!(evaluation.score, Some(StrengthScore::MAX));
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_matches_strength_score() {
        let passwords = [
            "",
            "a",
            "password",
            "MyPass123!",
            "VeryStrongPassword123!@#",
            "éèêë",
            "        ",
        ];

        for pwd in passwords {
            let evaluation = evaluate(pwd);
            assert_eq!(
                evaluation.score,
                Some(strength_score(pwd)),
                "report and scorer disagree on {:?}",
                pwd
            );
        }
    }
}
