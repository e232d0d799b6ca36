//! Signup form validation.
//!
//! Each form is a [`FormSchema`]: an ordered table of fields, each with a
//! required flag, a list of [`Rule`]s, and a [`Sanitizer`]. Validation never
//! fails; outcomes come back as [`FieldValidation`] / [`FormValidation`]
//! values ready to render next to the inputs.
//!
//! - [`FormSchema::validate_field`] — one field, every violated rule
//! - [`FormSchema::validate_form`] — all declared fields, first error each
//! - [`FormSchema::sanitize_data`] — per-field normalization before submit
//! - [`password_score`] / [`password_strength`] — 0–5 score and its label

mod form;
mod password;
mod rule;
mod sanitize;
mod schema;

pub use form::{FieldValidation, FormData, FormValidation};
pub use password::{
    password_score, password_strength, PasswordReport, PasswordStrength, STRONG_PASSWORD_LENGTH,
};
pub use rule::Rule;
pub use sanitize::Sanitizer;
pub use schema::{FieldSpec, FormKind, FormSchema};
