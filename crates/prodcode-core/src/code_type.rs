use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::{is_valid_ean, is_valid_isbn10, is_valid_upc};
use crate::normalize::{is_all_digits, normalize};
use crate::validation::ValidationError;

/// Product code formats recognised by the classifier.
///
/// ISBN-13 has no variant of its own: it shares the EAN-13 checksum, so a
/// 13-digit book number is reported as [`ProductCodeType::Ean13`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCodeType {
    /// Not a recognised product code.
    #[serde(rename = "NONE")]
    None,
    /// Stock keeping unit: 8 alphanumeric characters, no checksum.
    #[serde(rename = "SKU")]
    Sku,
    /// Amazon standard identification number: 10 alphanumeric characters.
    #[serde(rename = "ASIN")]
    Asin,
    /// 12-digit UPC-A.
    #[serde(rename = "UPC")]
    Upc,
    /// 8-digit EAN.
    #[serde(rename = "EAN_8")]
    Ean8,
    /// 13-digit EAN, also covering ISBN-13.
    #[serde(rename = "EAN_13")]
    Ean13,
    /// 10-digit ISBN.
    #[serde(rename = "ISBN_10")]
    Isbn10,
}

impl ProductCodeType {
    /// Every variant, in declaration order.
    pub const ALL: [ProductCodeType; 7] = [
        Self::None,
        Self::Sku,
        Self::Asin,
        Self::Upc,
        Self::Ean8,
        Self::Ean13,
        Self::Isbn10,
    ];

    /// Stable upper-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Sku => "SKU",
            Self::Asin => "ASIN",
            Self::Upc => "UPC",
            Self::Ean8 => "EAN_8",
            Self::Ean13 => "EAN_13",
            Self::Isbn10 => "ISBN_10",
        }
    }

    /// Normalized length a code of this type must have, if any.
    pub fn expected_len(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Sku | Self::Ean8 => Some(8),
            Self::Asin | Self::Isbn10 => Some(10),
            Self::Upc => Some(12),
            Self::Ean13 => Some(13),
        }
    }

    /// True for the all-digit formats that carry a check digit.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Upc | Self::Ean8 | Self::Ean13 | Self::Isbn10)
    }

    /// Checks `code` against this format only.
    ///
    /// Numeric formats run their checksum predicate on the digits of `code`;
    /// SKU and ASIN accept any normalized alphanumeric string of the right
    /// length that is not purely numeric. `None` never validates.
    pub fn validate(self, code: &str) -> bool {
        match self {
            Self::None => false,
            Self::Upc => is_valid_upc(code),
            Self::Ean8 | Self::Ean13 => is_valid_ean(code),
            Self::Isbn10 => is_valid_isbn10(code),
            Self::Sku | Self::Asin => {
                let normalized = normalize(code);
                Some(normalized.len()) == self.expected_len() && !is_all_digits(&normalized)
            }
        }
    }
}

impl fmt::Display for ProductCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCodeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "ProductCodeType",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in ProductCodeType::ALL {
            assert_eq!(kind.as_str().parse::<ProductCodeType>().unwrap(), kind);
        }
        assert_eq!("ean_13".parse::<ProductCodeType>().unwrap(), ProductCodeType::Ean13);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "ISBN_13".parse::<ProductCodeType>().unwrap_err();
        assert!(matches!(err, ValidationError::PatternMismatch { .. }));
    }

    #[test]
    fn validate_dispatches_per_format() {
        assert!(ProductCodeType::Upc.validate("036000291452"));
        assert!(ProductCodeType::Ean13.validate("4006381333931"));
        assert!(ProductCodeType::Ean8.validate("96385074"));
        assert!(ProductCodeType::Isbn10.validate("0000000000"));
        assert!(ProductCodeType::Sku.validate("AB-12-CD-34"));
        assert!(ProductCodeType::Asin.validate("B00X4WHQ04"));
        assert!(!ProductCodeType::Sku.validate("12345678"));
        assert!(!ProductCodeType::Asin.validate("B00X4WHQ0"));
        assert!(!ProductCodeType::None.validate("036000291452"));
    }

    #[test]
    fn numeric_flag() {
        assert!(ProductCodeType::Isbn10.is_numeric());
        assert!(!ProductCodeType::Asin.is_numeric());
        assert!(!ProductCodeType::None.is_numeric());
    }
}
