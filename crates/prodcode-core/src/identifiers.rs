use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::code_type::ProductCodeType;
use crate::normalize::{is_all_digits, normalize};
use crate::validation::ValidationError;

/// A normalized code together with the format it was classified as.
///
/// Only codes that classify as something other than
/// [`ProductCodeType::None`] can be constructed through [`ProductCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductCode {
    code: String,
    code_type: ProductCodeType,
}

impl ProductCode {
    /// Normalizes and classifies `value`, rejecting unrecognised codes.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let code_type = classify(raw);
        if code_type == ProductCodeType::None {
            return Err(ValidationError::PatternMismatch {
                field: "ProductCode",
                value: raw.to_string(),
            });
        }
        Ok(Self {
            code: normalize(raw),
            code_type,
        })
    }

    /// Normalized code characters.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Detected format.
    pub fn code_type(&self) -> ProductCodeType {
        self.code_type
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code_type, self.code)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

macro_rules! format_newtype {
    ($name:ident, $doc:expr, $kind:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Format this type accepts.
            pub const KIND: ProductCodeType = $kind;

            /// Parses a code of exactly this format, storing its normalized form.
            pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
                let normalized = normalize(value.as_ref());
                if Some(normalized.len()) != Self::KIND.expected_len()
                    || (Self::KIND.is_numeric() && !is_all_digits(&normalized))
                    || !Self::KIND.validate(&normalized)
                {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: value.as_ref().to_string(),
                    });
                }
                Ok(Self(normalized))
            }

            /// Normalized code characters.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

format_newtype!(Upc, "12-digit UPC-A with a valid check digit.", ProductCodeType::Upc);
format_newtype!(Ean8, "8-digit EAN with a valid check digit.", ProductCodeType::Ean8);
format_newtype!(
    Ean13,
    "13-digit EAN (or ISBN-13) with a valid check digit.",
    ProductCodeType::Ean13
);
format_newtype!(
    Isbn10,
    "10-digit ISBN passing the ascending-weight mod-11 check.",
    ProductCodeType::Isbn10
);
format_newtype!(
    Sku,
    "8-character alphanumeric SKU containing at least one letter.",
    ProductCodeType::Sku
);
format_newtype!(
    Asin,
    "10-character alphanumeric ASIN containing at least one letter.",
    ProductCodeType::Asin
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_recognised_codes() {
        let code = ProductCode::parse("978-0-13-468599-1").unwrap();
        assert_eq!(code.as_str(), "9780134685991");
        assert_eq!(code.code_type(), ProductCodeType::Ean13);
        assert_eq!(code.to_string(), "EAN_13:9780134685991");
    }

    #[test]
    fn parse_rejects_unrecognised_codes() {
        let err = ProductCode::parse("036000291451").unwrap_err();
        assert_eq!(
            err,
            ValidationError::PatternMismatch {
                field: "ProductCode",
                value: "036000291451".into(),
            }
        );
        assert!(ProductCode::parse("").is_err());
    }

    #[test]
    fn format_newtypes_check_length_and_checksum() {
        assert_eq!(Upc::parse("0-36000-29145-2").unwrap().as_str(), "036000291452");
        assert!(Upc::parse("4006381333931").is_err());
        assert!(Ean8::parse("96385074").is_ok());
        assert!(Ean13::parse("96385074").is_err());
        assert!(Isbn10::parse("1000000001").is_ok());
        assert!(Sku::parse("AB12CD34").is_ok());
        assert!(Sku::parse("12345678").is_err());
        assert!(Asin::parse("B00X4WHQ04").is_ok());
    }

    #[test]
    fn mixed_input_does_not_pass_a_numeric_newtype() {
        // The checksum alone would ignore the letter.
        assert!(crate::checksum::is_valid_upc("03600029145A2"));
        assert!(Upc::parse("03600029145A2").is_err());
        assert!(Upc::parse("0360002914A2").is_err());
    }
}
