//! Password strength meter
//!
//! Scores a password from 0 to 6 by counting six independent criteria
//! (two length thresholds and four ASCII character classes) and maps the
//! score to a `Weak`, `Moderate` or `Strong` label.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation tokens and debounced evaluation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{strength_label, strength_score, StrengthLabel};
//!
//! let score = strength_score("Abcdefgh1!");
//! assert_eq!(score.value(), 5);
//! assert_eq!(strength_label(score.value().into()), StrengthLabel::Strong);
//! ```
//!
//! For a report with hints, use [`evaluate_password_strength`]:
//!
//! ```rust
//! use pwd_meter::evaluate_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("abcdefgh".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Strength: {:?}", evaluation.strength());
//! for hint in &evaluation.reasons {
//!     println!("  - {}", hint);
//! }
//! ```

mod criteria;
mod error;
mod evaluation;
mod evaluator;
mod label;
mod score;
mod sections;

// Public API
pub use criteria::{Criterion, EXTENDED_LENGTH, MIN_LENGTH};
pub use error::StrengthError;
pub use evaluation::PasswordEvaluation;
pub use evaluator::evaluate_password_strength;
pub use label::{strength_label, StrengthLabel};
pub use score::{strength_score, StrengthScore};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};
