//! Check digit predicates over the digit form of a code.
//!
//! Every predicate first reduces its input to ASCII digits, so separators and
//! stray letters are ignored. An input with no digits at all is invalid.
//! Positions are 1-based and counted from the left; the rightmost digit is the
//! declared check digit.

use tracing::trace;

use crate::normalize::{digit_values, digits};

/// Which parity of position carries weight 3 in the mod-10 sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// UPC: odd positions weigh 3, even positions weigh 1.
    OddTriple,
    /// EAN: even positions weigh 3, odd positions weigh 1.
    EvenTriple,
}

impl Weighting {
    pub(crate) fn total(self, sum_odd: u32, sum_even: u32) -> u32 {
        match self {
            Self::OddTriple => sum_even + 3 * sum_odd,
            Self::EvenTriple => 3 * sum_even + sum_odd,
        }
    }
}

/// Check digit implied by a weighted total.
pub(crate) fn mod10_check_digit(total: u32) -> u32 {
    (10 - total % 10) % 10
}

/// Splits the payload digits (all but the last) by 1-based position parity.
///
/// Both sums are kept reduced modulo 10, which leaves the check digit
/// unchanged and bounds them for inputs of any length.
fn parity_sums(payload: &[u32]) -> (u32, u32) {
    payload
        .iter()
        .enumerate()
        .fold((0, 0), |(odd, even), (index, digit)| {
            if (index + 1) % 2 == 0 {
                (odd, (even + digit) % 10)
            } else {
                ((odd + digit) % 10, even)
            }
        })
}

/// Runs the parity-weighted mod-10 check shared by UPC and EAN.
pub fn is_valid_mod10(code: &str, weighting: Weighting) -> bool {
    let values = digit_values(&digits(code));
    let Some((&declared, payload)) = values.split_last() else {
        return false;
    };

    let (sum_odd, sum_even) = parity_sums(payload);
    let expected = mod10_check_digit(weighting.total(sum_odd, sum_even));
    trace!(?weighting, declared, expected, "mod-10 check digit");
    declared == expected
}

/// Validates a UPC check digit (weight 3 on odd positions).
pub fn is_valid_upc(code: &str) -> bool {
    is_valid_mod10(code, Weighting::OddTriple)
}

/// Validates an EAN-8 or EAN-13 check digit (weight 3 on even positions).
///
/// The arithmetic does not depend on length; the classifier only calls it
/// for 8 and 13 digits.
pub fn is_valid_ean(code: &str) -> bool {
    is_valid_mod10(code, Weighting::EvenTriple)
}

/// Validates an ISBN-13. Same predicate as [`is_valid_ean`].
pub fn is_valid_isbn13(code: &str) -> bool {
    is_valid_ean(code)
}

/// Validates an ISBN-10 as `sum(digit_i * i) mod 11 == 0`, `i` ascending from
/// the left.
///
/// This is not the textbook weighting (10 down to 1) and the `X` check
/// symbol is not supported: letters are stripped before summing, so a code
/// ending in `X` is checked on its first nine digits only.
pub fn is_valid_isbn10(code: &str) -> bool {
    let values = digit_values(&digits(code));
    if values.is_empty() {
        return false;
    }

    // Reduced modulo 11 at every step so arbitrarily long input cannot overflow.
    let residue = values
        .iter()
        .enumerate()
        .fold(0u32, |acc, (index, digit)| {
            let weight = ((index + 1) % 11) as u32;
            (acc + digit * weight) % 11
        });
    trace!(residue, "isbn-10 weighted sum mod 11");
    residue == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upc_reference_code() {
        assert!(is_valid_upc("036000291452"));
        assert!(!is_valid_upc("036000291451"));
    }

    #[test]
    fn upc_tolerates_separators_and_letters() {
        assert!(is_valid_upc("0 36000 29145 2"));
        assert!(is_valid_upc("0360002914A52"));
    }

    #[test]
    fn ean13_reference_code() {
        assert!(is_valid_ean("4006381333931"));
        assert!(!is_valid_ean("4006381333932"));
    }

    #[test]
    fn ean8_reference_code() {
        assert!(is_valid_ean("96385074"));
        assert!(!is_valid_ean("96385075"));
    }

    #[test]
    fn isbn13_matches_ean() {
        assert!(is_valid_isbn13("978-0-13-468599-1"));
        assert!(!is_valid_isbn13("978-0-13-468599-2"));
    }

    #[test]
    fn empty_or_digitless_is_invalid() {
        assert!(!is_valid_upc(""));
        assert!(!is_valid_ean("---"));
        assert!(!is_valid_isbn10("ABCDEFGHIJ"));
    }

    #[test]
    fn single_digit_compares_against_zero() {
        assert!(is_valid_upc("0"));
        assert!(!is_valid_upc("7"));
    }

    #[test]
    fn isbn10_ascending_weights() {
        assert!(is_valid_isbn10("0000000000"));
        // 1*1 + 10*1 = 11
        assert!(is_valid_isbn10("1000000001"));
        assert!(!is_valid_isbn10("1000000002"));
    }

    #[test]
    fn isbn10_x_check_symbol_is_not_supported() {
        // 080442957X is a valid ISBN-10 under the textbook rule.
        assert!(!is_valid_isbn10("080442957X"));
    }

    #[test]
    fn very_long_input_degrades_to_a_verdict() {
        let nines = "9".repeat(40_000);
        // 9 * (1 + 2 + ... + 40_000) = 9 * 800_020_000, which is 2 mod 11.
        assert!(!is_valid_isbn10(&nines));
        // 39_999 payload nines: 20_000 odd and 19_999 even positions give
        // 19_999 * 9 + 3 * 20_000 * 9 = 719_991, so the check digit is 9.
        assert!(is_valid_upc(&nines));
        assert!(!is_valid_upc(&format!("{}8", "9".repeat(39_999))));
        assert!(!crate::ProductCodeType::Isbn10.validate(&nines));
    }

    #[test]
    fn isbn10_weights_wrap_past_eleven_digits() {
        // 1*11 is 0 mod 11; 1*12 is 1 mod 11.
        assert!(is_valid_isbn10("00000000001"));
        assert!(!is_valid_isbn10("000000000001"));
    }

    #[test]
    fn weighting_totals() {
        assert_eq!(Weighting::OddTriple.total(2, 5), 11);
        assert_eq!(Weighting::EvenTriple.total(2, 5), 17);
        assert_eq!(mod10_check_digit(58), 2);
        assert_eq!(mod10_check_digit(60), 0);
    }
}
