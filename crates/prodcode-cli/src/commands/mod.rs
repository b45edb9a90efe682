//! Subcommand implementations.

use clap::ValueEnum;
use thiserror::Error;

pub mod classify;
pub mod validate;

/// Formats accepted by `prodcode validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodeFormat {
    /// 12-digit UPC-A
    Upc,
    /// EAN-8 or EAN-13
    Ean,
    /// 10-digit ISBN
    #[value(name = "isbn10")]
    Isbn10,
    /// 13-digit ISBN
    #[value(name = "isbn13")]
    Isbn13,
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every code was recognised or valid.
    Pass,
    /// At least one code was unrecognised or invalid.
    Fail,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Pass => 0,
            Outcome::Fail => 2,
        }
    }
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file or stdin could not be read.
    #[error("failed to read {source_name}: {source}")]
    Read {
        /// File path or `stdin`.
        source_name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// `--legacy` was given a code that is not a plain integer.
    #[error("'{0}' is not a numeric code")]
    NotNumeric(String),
    /// Output could not be serialized.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
