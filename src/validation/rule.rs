//! Field validation rules.

use regex::Regex;
use serde::Deserialize;

use super::form::FormData;
use super::password::CharClasses;

/// A single constraint on a field's value.
///
/// Lengths count Unicode scalar values. Rules never see empty values; the
/// required check runs first.
#[derive(Debug, Clone)]
pub enum Rule {
    MinLength(usize),
    MaxLength(usize),
    ExactLength(usize),
    /// The whole value must match `regex`; `message` is shown otherwise.
    Pattern { regex: Regex, message: String },
    /// The value must equal another field's value.
    Matches { field: String, message: String },
    /// Requires an uppercase letter, a lowercase letter, a digit, and a
    /// special character; each missing class gets its own message.
    PasswordComplexity,
}

impl Rule {
    /// Compiles a pattern rule.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self::Pattern {
            regex: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// Appends a message for each way `value` violates this rule.
    pub(crate) fn check(&self, label: &str, value: &str, form: &FormData, errors: &mut Vec<String>) {
        match self {
            Self::MinLength(min) => {
                if value.chars().count() < *min {
                    errors.push(format!("{label} must be at least {min} characters"));
                }
            }
            Self::MaxLength(max) => {
                if value.chars().count() > *max {
                    errors.push(format!("{label} must be at most {max} characters"));
                }
            }
            Self::ExactLength(len) => {
                if value.chars().count() != *len {
                    errors.push(format!("{label} must be exactly {len} characters"));
                }
            }
            Self::Pattern { regex, message } => {
                if !regex.is_match(value) {
                    errors.push(message.clone());
                }
            }
            Self::Matches { field, message } => {
                if value != form.get(field) {
                    errors.push(message.clone());
                }
            }
            Self::PasswordComplexity => {
                let classes = CharClasses::of(value);
                let required = [
                    (classes.upper, "an uppercase letter"),
                    (classes.lower, "a lowercase letter"),
                    (classes.digit, "a number"),
                    (classes.special, "a special character"),
                ];
                for (_, what) in required.iter().filter(|(present, _)| !present) {
                    errors.push(format!("{label} must contain at least {what}"));
                }
            }
        }
    }
}

/// Serialized form of [`Rule`], as written in schema files.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum RuleDef {
    MinLength {
        value: usize,
    },
    MaxLength {
        value: usize,
    },
    ExactLength {
        value: usize,
    },
    Pattern {
        pattern: String,
        message: String,
    },
    Matches {
        field: String,
        message: Option<String>,
    },
    PasswordComplexity,
}

impl RuleDef {
    /// Compiles this definition for the field labelled `label`.
    pub fn compile(self, label: &str) -> Result<Rule, regex::Error> {
        Ok(match self {
            Self::MinLength { value } => Rule::MinLength(value),
            Self::MaxLength { value } => Rule::MaxLength(value),
            Self::ExactLength { value } => Rule::ExactLength(value),
            Self::Pattern { pattern, message } => Rule::pattern(&pattern, message)?,
            Self::Matches { field, message } => Rule::Matches {
                message: message.unwrap_or_else(|| format!("{label} does not match {field}")),
                field,
            },
            Self::PasswordComplexity => Rule::PasswordComplexity,
        })
    }
}
