//! Per-field input normalization.

use serde::Deserialize;

/// How a field's raw value is normalized before validation and submission.
///
/// Every sanitizer is idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sanitizer {
    /// Strip surrounding whitespace.
    #[default]
    Trim,
    /// Trim and lowercase.
    Email,
    /// Keep ASCII digits only.
    Digits,
    /// Keep ASCII letters and digits, uppercased.
    Alphanumeric,
    /// Leave untouched (passwords).
    Preserve,
}

impl Sanitizer {
    /// Applies this sanitizer to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trashroute::validation::Sanitizer;
    ///
    /// assert_eq!(Sanitizer::Email.apply("  Jane@Mail.LK "), "jane@mail.lk");
    /// assert_eq!(Sanitizer::Digits.apply("071-234 5678"), "0712345678");
    /// assert_eq!(Sanitizer::Alphanumeric.apply("pv/00-123"), "PV00123");
    /// assert_eq!(Sanitizer::Preserve.apply(" secret "), " secret ");
    /// ```
    pub fn apply(&self, value: &str) -> String {
        match self {
            Self::Trim => value.trim().to_string(),
            Self::Email => value.trim().to_lowercase(),
            Self::Digits => value.chars().filter(char::is_ascii_digit).collect(),
            Self::Alphanumeric => value
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_uppercase())
                .collect(),
            Self::Preserve => value.to_string(),
        }
    }
}
