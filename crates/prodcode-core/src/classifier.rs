use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checksum::{is_valid_ean, is_valid_isbn10, is_valid_upc};
use crate::code_type::ProductCodeType;
use crate::normalize::{is_all_digits, normalize};

/// Classifies a raw code by its normalized shape.
///
/// All-digit codes of length 8, 10, 12 and 13 are reported as EAN-8,
/// ISBN-10, UPC and EAN-13 only when their check digit holds. Codes with at
/// least one letter are reported as SKU (8 characters) or ASIN (10
/// characters) on shape alone. Anything else is [`ProductCodeType::None`].
pub fn classify(code: &str) -> ProductCodeType {
    if code.is_empty() {
        return ProductCodeType::None;
    }
    classify_normalized(&normalize(code))
}

/// [`classify`] for callers holding an optional code; `None` is unclassified.
pub fn classify_opt(code: Option<&str>) -> ProductCodeType {
    code.map_or(ProductCodeType::None, classify)
}

fn classify_normalized(normalized: &str) -> ProductCodeType {
    let kind = if is_all_digits(normalized) {
        match normalized.len() {
            8 if is_valid_ean(normalized) => ProductCodeType::Ean8,
            10 if is_valid_isbn10(normalized) => ProductCodeType::Isbn10,
            12 if is_valid_upc(normalized) => ProductCodeType::Upc,
            13 if is_valid_ean(normalized) => ProductCodeType::Ean13,
            _ => ProductCodeType::None,
        }
    } else {
        match normalized.len() {
            8 => ProductCodeType::Sku,
            10 => ProductCodeType::Asin,
            _ => ProductCodeType::None,
        }
    };
    debug!(normalized, kind = %kind, "classified product code");
    kind
}

/// Outcome of classifying one input, suitable for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Code exactly as supplied.
    pub input: String,
    /// Input with everything outside `[A-Za-z0-9]` removed.
    pub normalized: String,
    /// Detected format.
    pub code_type: ProductCodeType,
    /// Whether any format was detected.
    pub valid: bool,
}

/// Classifies `code` and keeps the intermediate normalized form.
pub fn classify_report(code: &str) -> Classification {
    let normalized = normalize(code);
    let code_type = if code.is_empty() {
        ProductCodeType::None
    } else {
        classify_normalized(&normalized)
    };
    Classification {
        input: code.to_string(),
        normalized,
        code_type,
        valid: code_type != ProductCodeType::None,
    }
}
