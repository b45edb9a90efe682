//! Validate command implementation.

#![allow(deprecated)]

use prodcode_core::{
    is_valid_ean, is_valid_ean_numeric, is_valid_isbn10, is_valid_isbn10_numeric, is_valid_isbn13,
    is_valid_isbn13_numeric, is_valid_upc, is_valid_upc_numeric,
};
use tracing::warn;

use super::{CliError, CodeFormat, Outcome};

fn check_str(format: CodeFormat, code: &str) -> bool {
    match format {
        CodeFormat::Upc => is_valid_upc(code),
        CodeFormat::Ean => is_valid_ean(code),
        CodeFormat::Isbn10 => is_valid_isbn10(code),
        CodeFormat::Isbn13 => is_valid_isbn13(code),
    }
}

fn check_numeric(format: CodeFormat, value: u64) -> bool {
    match format {
        CodeFormat::Upc => is_valid_upc_numeric(value),
        CodeFormat::Ean => is_valid_ean_numeric(value),
        CodeFormat::Isbn10 => is_valid_isbn10_numeric(value),
        CodeFormat::Isbn13 => is_valid_isbn13_numeric(value),
    }
}

pub fn run(format: CodeFormat, code: String, legacy: bool) -> Result<Outcome, CliError> {
    let valid = if legacy {
        let value: u64 = code
            .trim()
            .parse()
            .map_err(|_| CliError::NotNumeric(code.clone()))?;
        if code.trim().starts_with('0') {
            warn!(code = %code, "leading zeros are dropped by the numeric check");
        }
        check_numeric(format, value)
    } else {
        check_str(format, &code)
    };

    println!("{}", if valid { "valid" } else { "invalid" });
    Ok(if valid { Outcome::Pass } else { Outcome::Fail })
}
