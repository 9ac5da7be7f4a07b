//! The six predicates a password is scored against.

/// Length that earns the first length point.
pub const MIN_LENGTH: usize = 8;

/// Length that earns the second length point.
pub const EXTENDED_LENGTH: usize = 12;

/// A single scoring predicate. Each one that holds is worth one point.
///
/// Character classes are ASCII only: any character that is not an ASCII
/// letter or digit, including non-ASCII letters such as `é`, is special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    MinLength,
    ExtendedLength,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl Criterion {
    /// All criteria in scoring order.
    pub const ALL: [Criterion; 6] = [
        Criterion::MinLength,
        Criterion::ExtendedLength,
        Criterion::Lowercase,
        Criterion::Uppercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Returns `true` if `password` satisfies this criterion.
    ///
    /// Length is measured in UTF-16 code units, so characters outside the
    /// Basic Multilingual Plane (most emoji) count as 2.
    pub fn is_met(self, password: &str) -> bool {
        match self {
            Criterion::MinLength => utf16_len(password) >= MIN_LENGTH,
            Criterion::ExtendedLength => utf16_len(password) >= EXTENDED_LENGTH,
            Criterion::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Criterion::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Criterion::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Suggestion shown to the user when the criterion is not met.
    pub fn hint(self) -> String {
        match self {
            Criterion::MinLength => format!("Use at least {} characters", MIN_LENGTH),
            Criterion::ExtendedLength => {
                format!("Use {} or more characters for extra strength", EXTENDED_LENGTH)
            }
            Criterion::Lowercase => "Add a lowercase letter (a-z)".to_string(),
            Criterion::Uppercase => "Add an uppercase letter (A-Z)".to_string(),
            Criterion::Digit => "Add a number (0-9)".to_string(),
            Criterion::Special => "Add a special character".to_string(),
        }
    }
}

fn utf16_len(password: &str) -> usize {
    password.encode_utf16().count()
}
