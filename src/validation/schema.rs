//! Declarative form schemas.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::form::{FieldValidation, FormData, FormValidation};
use super::rule::{Rule, RuleDef};
use super::sanitize::Sanitizer;
use crate::error::SchemaError;

static CUSTOMER_SIGNUP: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::from_toml_str(include_str!("../../schemas/customer_signup.toml"))
        .expect("built-in customer schema is valid")
});

static COMPANY_SIGNUP: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::from_toml_str(include_str!("../../schemas/company_signup.toml"))
        .expect("built-in company schema is valid")
});

/// Rules and normalization for one form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    label: String,
    required: bool,
    rules: Vec<Rule>,
    sanitizer: Sanitizer,
}

impl FieldSpec {
    /// Creates an optional field with no rules, trimmed on sanitize.
    /// The label defaults to the field name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            required: false,
            rules: Vec::new(),
            sanitizer: Sanitizer::default(),
        }
    }

    /// Sets the human-readable label used in messages.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the sanitizer.
    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn sanitizer(&self) -> Sanitizer {
        self.sanitizer
    }

    /// Validates `value` against this field's rules.
    ///
    /// An empty (or whitespace-only) value yields only the required message
    /// for required fields and passes for optional ones. Otherwise every
    /// violated rule contributes its message.
    pub fn validate(&self, value: &str, form: &FormData) -> FieldValidation {
        if value.trim().is_empty() {
            return if self.required {
                FieldValidation::from_errors(vec![format!("{} is required", self.label)])
            } else {
                FieldValidation::valid()
            };
        }

        let mut errors = Vec::new();
        for rule in &self.rules {
            rule.check(&self.label, value, form, &mut errors);
        }
        FieldValidation::from_errors(errors)
    }
}

/// An ordered table of field specs for one form.
///
/// Schemas are data: the two signup forms ship as TOML files and custom
/// schemas load through [`FormSchema::from_toml_str`].
///
/// # Examples
///
/// ```
/// use trashroute::validation::{FormData, FormSchema};
///
/// let schema = FormSchema::customer_signup();
/// let result = schema.validate_field("phoneNumber", "0712345678", &FormData::new());
/// assert!(result.is_valid);
///
/// let result = schema.validate_field("email", "not-an-email", &FormData::new());
/// assert!(!result.is_valid);
/// assert!(result.errors[0].contains("valid email"));
/// ```
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Creates a schema from field specs.
    ///
    /// # Errors
    ///
    /// Fails if a field name repeats or a `Matches` rule points at a field
    /// the schema does not declare.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        for field in &fields {
            for rule in &field.rules {
                if let Rule::Matches { field: target, .. } = rule {
                    if !seen.contains(target.as_str()) {
                        return Err(SchemaError::UnknownMatchTarget {
                            field: field.name.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(Self {
            name: name.into(),
            fields,
        })
    }

    /// Loads a schema from a TOML document.
    ///
    /// ```
    /// use trashroute::validation::{FormData, FormSchema};
    ///
    /// let schema = FormSchema::from_toml_str(r#"
    ///     name = "pickup_note"
    ///
    ///     [[fields]]
    ///     name = "note"
    ///     label = "Note"
    ///     required = true
    ///     rules = [{ kind = "max_length", value = 10 }]
    /// "#).unwrap();
    ///
    /// let result = schema.validate_field("note", "far too long a note", &FormData::new());
    /// assert_eq!(result.errors, vec!["Note must be at most 10 characters"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, an invalid regex, a repeated field name, or
    /// a `matches` rule naming an undeclared field.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        let def: SchemaDef = toml::from_str(source)?;
        let fields = def
            .fields
            .into_iter()
            .map(FieldDef::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(def.name, fields)
    }

    /// Household signup form.
    pub fn customer_signup() -> &'static FormSchema {
        &CUSTOMER_SIGNUP
    }

    /// Collection company signup form.
    pub fn company_signup() -> &'static FormSchema {
        &COMPANY_SIGNUP
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field specs in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates one field. Fields this schema does not declare always pass.
    pub fn validate_field(&self, field: &str, value: &str, form: &FormData) -> FieldValidation {
        match self.field(field) {
            Some(spec) => spec.validate(value, form),
            None => FieldValidation::valid(),
        }
    }

    /// Validates every declared field, keeping the first error of each.
    ///
    /// Missing fields are validated as empty.
    pub fn validate_form(&self, form: &FormData) -> FormValidation {
        let mut errors = BTreeMap::new();
        for spec in &self.fields {
            let result = spec.validate(form.get(&spec.name), form);
            if let Some(first) = result.first_error() {
                errors.insert(spec.name.clone(), first.to_string());
            }
        }
        debug!(schema = %self.name, failed = errors.len(), "validated form");
        FormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Normalizes submitted values field by field.
    ///
    /// Declared fields use their sanitizer; undeclared fields are trimmed.
    /// Password fields are declared with [`Sanitizer::Preserve`] and pass
    /// through untouched.
    pub fn sanitize_data(&self, form: &FormData) -> FormData {
        form.iter()
            .map(|(name, value)| {
                let sanitizer = self.field(name).map(FieldSpec::sanitizer).unwrap_or_default();
                (name, sanitizer.apply(value))
            })
            .collect()
    }
}

/// The signup forms served by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FormKind {
    Customer,
    Company,
}

impl FormKind {
    /// Built-in schema for this form.
    pub fn schema(self) -> &'static FormSchema {
        match self {
            Self::Customer => FormSchema::customer_signup(),
            Self::Company => FormSchema::company_signup(),
        }
    }
}

impl FromStr for FormKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "company" => Ok(Self::Company),
            other => Err(SchemaError::UnknownForm(other.to_string())),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Company => write!(f, "company"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SchemaDef {
    name: String,
    #[serde(default)]
    fields: Vec<FieldDef>,
}

#[derive(Debug, Deserialize)]
struct FieldDef {
    name: String,
    label: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    sanitizer: Sanitizer,
    #[serde(default)]
    rules: Vec<RuleDef>,
}

impl FieldDef {
    fn compile(self) -> Result<FieldSpec, SchemaError> {
        let label = self.label.unwrap_or_else(|| self.name.clone());
        let mut rules = Vec::with_capacity(self.rules.len());
        for def in self.rules {
            let rule = def.compile(&label).map_err(|source| SchemaError::InvalidPattern {
                field: self.name.clone(),
                source,
            })?;
            rules.push(rule);
        }
        Ok(FieldSpec {
            name: self.name,
            label,
            required: self.required,
            rules,
            sanitizer: self.sanitizer,
        })
    }
}
