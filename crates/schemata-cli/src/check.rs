//! # Check Subcommand
//!
//! `schemata check --schema <descriptor> <document> [--format json|text]`

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use schemata::{load_document, load_schema, ValidationResult};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the schema descriptor (YAML or JSON).
    #[arg(long, short)]
    pub schema: PathBuf,

    /// Path to the document to validate (`.yaml`/`.yml` or JSON).
    pub document: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// How a result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The serialized validation result.
    Json,
    /// `valid`, or one line per error.
    Text,
}

/// Load the schema and document and validate.
///
/// # Errors
///
/// Fails if either file cannot be loaded or the descriptor is misconfigured.
pub fn run(args: &CheckArgs) -> anyhow::Result<ValidationResult> {
    let schema = load_schema(&args.schema)
        .with_context(|| format!("loading schema {}", args.schema.display()))?;
    let document = load_document(&args.document)
        .with_context(|| format!("loading document {}", args.document.display()))?;

    let result = schema.validate_value(&document);
    tracing::info!(
        schema = %args.schema.display(),
        document = %args.document.display(),
        valid = result.is_valid(),
        "checked document"
    );
    Ok(result)
}

/// The document is valid.
pub const EXIT_VALID: u8 = 0;
/// The document failed validation.
pub const EXIT_INVALID: u8 = 1;
/// The schema or document could not be loaded, or the schema is misconfigured.
pub const EXIT_ERROR: u8 = 2;

/// Map a check outcome to the process exit status.
pub fn exit_code(outcome: &anyhow::Result<ValidationResult>) -> u8 {
    match outcome {
        Ok(result) if result.is_valid() => EXIT_VALID,
        Ok(_) => EXIT_INVALID,
        Err(_) => EXIT_ERROR,
    }
}

/// Render a result in the requested format.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render(result: &ValidationResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(match result.clone().into_result() {
            Ok(_) => "valid".to_string(),
            Err(errors) => format!("invalid:\n{errors}"),
        }),
    }
}
