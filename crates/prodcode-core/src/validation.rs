use thiserror::Error;

/// Validation errors raised by the strict product code API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not have the shape or checksum of any known format.
    #[error("{field} ('{value}') is not recognised")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
