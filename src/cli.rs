//! Command-line front end: argument parsing, logging setup, and the
//! `order` / `validate` commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constructive::{order_path, PathOrderConfig};
use crate::error::{RouteError, SchemaError};
use crate::models::{Point, Stop};
use crate::validation::{FormData, FormKind, FormSchema, FormValidation};

#[derive(Debug, Parser)]
#[command(name = "trashroute", version, about = "Order collection stops and check signup forms")]
pub struct CliConfig {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Order a JSON array of {latitude, longitude} points
    Order {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Refine the greedy tour with 2-opt
        #[arg(long)]
        two_opt: bool,

        /// Return the greedy tour even when the input order is shorter
        #[arg(long)]
        no_fallback: bool,
    },
    /// Sanitize and validate a JSON form object
    Validate {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Built-in signup form to validate against
        #[arg(long, value_enum, default_value_t = FormKind::Customer, conflicts_with = "schema")]
        form: FormKind,

        /// TOML schema file to validate against instead of a built-in form
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result of the `order` command.
#[derive(Debug, Serialize)]
pub struct OrderOutput {
    pub order: Vec<usize>,
    pub stops: Vec<Stop>,
    pub length: f64,
}

/// Result of the `validate` command.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub sanitized: FormData,
    #[serde(flatten)]
    pub validation: FormValidation,
}

pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trashroute=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trashroute=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Orders the points in a JSON document.
pub fn run_order(json: &str, config: &PathOrderConfig) -> Result<OrderOutput, CliError> {
    let points: Vec<Point> = serde_json::from_str(json)?;
    tracing::info!(points = points.len(), "ordering path");
    let tour = order_path(&points, config)?;
    Ok(OrderOutput {
        order: tour.order().to_vec(),
        stops: tour.stops(),
        length: tour.length(),
    })
}

/// Sanitizes then validates the form in a JSON document.
pub fn run_validate(json: &str, schema: &FormSchema) -> Result<ValidateOutput, CliError> {
    let data: FormData = serde_json::from_str(json)?;
    let sanitized = schema.sanitize_data(&data);
    let validation = schema.validate_form(&sanitized);
    tracing::info!(
        schema = schema.name(),
        valid = validation.is_valid,
        "validated form"
    );
    Ok(ValidateOutput {
        sanitized,
        validation,
    })
}

/// Runs the parsed command, printing JSON to stdout.
///
/// Returns `false` when a validated form is invalid.
pub fn run(config: &CliConfig) -> Result<bool, CliError> {
    match &config.command {
        Command::Order {
            input,
            two_opt,
            no_fallback,
        } => {
            let json = read_input(input.as_deref())?;
            let order_config = PathOrderConfig::default()
                .with_two_opt(*two_opt)
                .with_input_fallback(!no_fallback);
            let output = run_order(&json, &order_config)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(true)
        }
        Command::Validate {
            input,
            form,
            schema,
        } => {
            let custom;
            let schema = match schema {
                Some(path) => {
                    custom = FormSchema::from_toml_str(&fs::read_to_string(path)?)?;
                    &custom
                }
                None => form.schema(),
            };
            let json = read_input(input.as_deref())?;
            let output = run_validate(&json, schema)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(output.validation.is_valid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_args() {
        let config = CliConfig::parse_from(["trashroute", "-v", "order", "--two-opt", "stops.json"]);
        assert!(config.verbose);
        match config.command {
            Command::Order {
                input,
                two_opt,
                no_fallback,
            } => {
                assert_eq!(input, Some(PathBuf::from("stops.json")));
                assert!(two_opt);
                assert!(!no_fallback);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_validate_args() {
        let config = CliConfig::parse_from(["trashroute", "validate", "--form", "company"]);
        match config.command {
            Command::Validate { form, schema, .. } => {
                assert_eq!(form, FormKind::Company);
                assert!(schema.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_order() {
        let json = r#"[
            {"latitude": 0.0, "longitude": 0.0},
            {"latitude": 5.0, "longitude": 0.0},
            {"latitude": 1.0, "longitude": 0.0}
        ]"#;
        let out = run_order(json, &PathOrderConfig::default()).expect("valid input");
        assert_eq!(out.order, vec![0, 2, 1]);
        assert_eq!(out.stops[1].source_index, 2);
        assert!((out.length - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_run_order_bad_json() {
        let err = run_order(r#"[{"lat": 1}]"#, &PathOrderConfig::default()).expect_err("bad shape");
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_run_validate_sanitizes_first() {
        let json = r#"{
            "firstName": " Nimal ",
            "lastName": "Perera",
            "email": " NIMAL@Example.lk ",
            "phoneNumber": "071 234 5678",
            "address": "12 Temple Road, Kandy",
            "password": "Green#Bin9",
            "confirmPassword": "Green#Bin9"
        }"#;
        let out = run_validate(json, FormKind::Customer.schema()).expect("valid json");
        assert!(out.validation.is_valid, "{:?}", out.validation.errors);
        assert_eq!(out.sanitized.get("email"), "nimal@example.lk");

        let value = serde_json::to_value(&out).expect("serialize");
        assert_eq!(value["isValid"], true);
        assert_eq!(value["sanitized"]["phoneNumber"], "0712345678");
    }
}
