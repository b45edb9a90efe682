//! Classification and check digit validation for consumer product codes.
//!
//! Recognised formats are UPC-A, EAN-8, EAN-13 (which also covers ISBN-13),
//! ISBN-10, SKU and ASIN. Every operation is a pure function of its input:
//! malformed or empty codes yield [`ProductCodeType::None`] or `false`, never
//! an error. The [`identifiers`] module adds a strict, `Result`-returning API
//! on top for callers that want typed codes.
//!
//! ```rust
//! use prodcode_core::{classify, is_valid_upc, ProductCodeType};
//!
//! assert_eq!(classify("978-0-13-468599-1"), ProductCodeType::Ean13);
//! assert!(is_valid_upc("036000291452"));
//! ```
//!
#![deny(missing_docs)]

/// Check digit predicates for UPC, EAN and ISBN.
pub mod checksum;
/// Shape-based classification entry points.
pub mod classifier;
/// The `ProductCodeType` enumeration.
pub mod code_type;
/// Validated product code newtypes.
pub mod identifiers;
/// Deprecated predicates over numeric magnitudes.
pub mod legacy;
/// Character filters applied before classification.
pub mod normalize;
/// Validation helpers used by the strict API.
pub mod validation;

pub use checksum::{
    is_valid_ean, is_valid_isbn10, is_valid_isbn13, is_valid_mod10, is_valid_upc, Weighting,
};
pub use classifier::{classify, classify_opt, classify_report, Classification};
pub use code_type::ProductCodeType;
pub use identifiers::{Asin, Ean13, Ean8, Isbn10, ProductCode, Sku, Upc};
#[allow(deprecated)]
pub use legacy::{
    is_valid_ean_numeric, is_valid_isbn10_numeric, is_valid_isbn13_numeric, is_valid_upc_numeric,
};
pub use normalize::normalize;
pub use validation::ValidationError;
