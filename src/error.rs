//! Error types.

use thiserror::Error;

/// Errors raised while ordering a path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// A point had a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate (latitude {latitude}, longitude {longitude})")]
    NonFiniteCoordinate {
        /// Input index of the offending point.
        index: usize,
        latitude: f64,
        longitude: f64,
    },

    /// A point lay outside latitude ±90° or longitude ±180°.
    #[error("point {index} is out of range (latitude {latitude}, longitude {longitude})")]
    OutOfRange {
        index: usize,
        latitude: f64,
        longitude: f64,
    },
}

/// Errors raised while loading a form schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("field '{field}' must match '{target}', which is not declared")]
    UnknownMatchTarget { field: String, target: String },

    #[error("unknown form '{0}', expected 'customer' or 'company'")]
    UnknownForm(String),

    #[error("failed to parse schema: {0}")]
    Parse(#[from] toml::de::Error),
}
