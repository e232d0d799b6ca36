//! Password strength scoring.

use serde::Serialize;

/// Minimum length that earns the length point.
pub const STRONG_PASSWORD_LENGTH: usize = 8;

/// Ordinal strength label shown under the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a 0..=5 score to a label: 0–2 weak, 3 medium, 4 strong, 5 very strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Label as rendered in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
        }
    }
}

/// Score and label for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordReport {
    pub score: u8,
    pub strength: PasswordStrength,
}

impl PasswordReport {
    /// Scores `password`.
    pub fn of(password: &str) -> Self {
        let score = password_score(password);
        Self {
            score,
            strength: PasswordStrength::from_score(score),
        }
    }
}

/// Character classes a strong password mixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharClasses {
    pub fn of(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_uppercase() {
                classes.upper = true;
            } else if c.is_lowercase() {
                classes.lower = true;
            } else if c.is_ascii_digit() {
                classes.digit = true;
            } else if !c.is_alphanumeric() && !c.is_whitespace() {
                classes.special = true;
            }
        }
        classes
    }
}

/// Counts satisfied strength criteria, 0..=5: length ≥ 8, an uppercase
/// letter, a lowercase letter, a digit, a special character.
///
/// # Examples
///
/// ```
/// use trashroute::validation::{password_score, password_strength, PasswordStrength};
///
/// assert_eq!(password_score("abc"), 1);
/// assert_eq!(password_score("Abcdefg1!"), 5);
/// assert_eq!(password_strength("Abcdefg1!"), PasswordStrength::VeryStrong);
/// ```
pub fn password_score(password: &str) -> u8 {
    let classes = CharClasses::of(password);
    [
        password.chars().count() >= STRONG_PASSWORD_LENGTH,
        classes.upper,
        classes.lower,
        classes.digit,
        classes.special,
    ]
    .into_iter()
    .filter(|&met| met)
    .count() as u8
}

/// Strength label for `password`.
pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordStrength::from_score(password_score(password))
}
