//! Classify command implementation.

use std::io::{self, Read};

use prodcode_core::classify_report;
use tracing::debug;

use super::{CliError, Outcome};
use crate::output;

/// Collects codes from arguments, else from a file, else from stdin.
fn collect_codes(codes: Vec<String>, input: Option<String>) -> Result<Vec<String>, CliError> {
    if !codes.is_empty() {
        return Ok(codes);
    }

    let text = if let Some(path) = input {
        std::fs::read_to_string(&path).map_err(|source| CliError::Read {
            source_name: path,
            source,
        })?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                source_name: "stdin".into(),
                source,
            })?;
        buffer
    };

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

pub fn run(
    codes: Vec<String>,
    input: Option<String>,
    json: bool,
    strict: bool,
) -> Result<Outcome, CliError> {
    let codes = collect_codes(codes, input)?;
    debug!(count = codes.len(), "classifying codes");

    if !json {
        output::print_table_header();
    }

    let mut unrecognised = 0usize;
    for code in &codes {
        let report = classify_report(code);
        if !report.valid {
            unrecognised += 1;
        }
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", output::format_table_row(&report));
        }
    }

    if strict && unrecognised > 0 {
        return Ok(Outcome::Fail);
    }
    Ok(Outcome::Pass)
}
