//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrengthError {
    #[error("Strength score {0} is outside the range 0..=6")]
    OutOfRange(i64),
    #[error("Unknown strength label: {0:?}")]
    UnknownLabel(String),
}
