//! Form data and validation result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw form state: field name → submitted string.
///
/// Serializes as a plain JSON/TOML object. Reading a field that was never
/// submitted yields `""`.
///
/// # Examples
///
/// ```
/// use trashroute::validation::FormData;
///
/// let form: FormData = [("email", "a@b.lk")].into_iter().collect();
/// assert_eq!(form.get("email"), "a@b.lk");
/// assert_eq!(form.get("phoneNumber"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    /// Creates empty form data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `field`, or `""` if absent.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    /// Returns `true` if `field` was submitted.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Sets `field` to `value`, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of submitted fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for FormData {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Outcome of validating a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    /// `true` when no rule was violated.
    pub is_valid: bool,
    /// Messages for every violated rule, in rule order.
    pub errors: Vec<String>,
}

impl FieldValidation {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Builds a result from collected messages; valid iff there are none.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// First error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    /// `true` when every declared field passed.
    pub is_valid: bool,
    /// First error message per failing field.
    pub errors: BTreeMap<String, String>,
}

impl FormValidation {
    /// Error for `field`, if it failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}
