//! Deprecated checksum predicates over numeric magnitudes.
//!
//! These exist for callers that stored codes as integers. A leading zero
//! cannot survive that conversion, so the digit count is taken from the
//! magnitude (`floor(log10(value)) + 1`) and any code whose digit form starts
//! with `0` is checked over fewer digits than it really has. Results then
//! differ from the string predicates in [`crate::checksum`]; prefer those.
//!
//! Zero and values at or above the format's exclusive bound (`10^12` for UPC,
//! `10^13` for EAN, `10^10` for ISBN-10) are always invalid.

#![allow(deprecated)]

use tracing::trace;

use crate::checksum::{mod10_check_digit, Weighting};

/// Exclusive upper bound for a 12-digit UPC.
pub const UPC_LIMIT: u64 = 1_000_000_000_000;
/// Exclusive upper bound for a 13-digit EAN.
pub const EAN_LIMIT: u64 = 10_000_000_000_000;
/// Exclusive upper bound for a 10-digit ISBN.
pub const ISBN10_LIMIT: u64 = 10_000_000_000;

/// Number of decimal digits in `value`, i.e. `floor(log10(value)) + 1`.
///
/// `log10(0)` is undefined; zero is counted as a single digit.
pub fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

fn in_range(value: u64, limit: u64) -> bool {
    value > 0 && value < limit
}

/// Mod-10 check over a magnitude, walking digits from the right while
/// numbering positions from the left.
fn is_valid_mod10_numeric(value: u64, limit: u64, weighting: Weighting) -> bool {
    if !in_range(value, limit) {
        return false;
    }

    let n_digits = digit_count(value);
    let declared = (value % 10) as u32;
    let mut rest = value / 10;

    let mut sum_odd = 0;
    let mut sum_even = 0;
    for position in (1..n_digits).rev() {
        let digit = (rest % 10) as u32;
        rest /= 10;
        if position % 2 == 0 {
            sum_even += digit;
        } else {
            sum_odd += digit;
        }
    }

    let expected = mod10_check_digit(weighting.total(sum_odd, sum_even));
    trace!(value, n_digits, declared, expected, "numeric mod-10 check digit");
    declared == expected
}

/// Numeric form of [`crate::checksum::is_valid_upc`].
#[deprecated(note = "leading zeros are lost in a numeric value; use `is_valid_upc` on the string form")]
pub fn is_valid_upc_numeric(value: u64) -> bool {
    is_valid_mod10_numeric(value, UPC_LIMIT, Weighting::OddTriple)
}

/// Numeric form of [`crate::checksum::is_valid_ean`].
#[deprecated(note = "leading zeros are lost in a numeric value; use `is_valid_ean` on the string form")]
pub fn is_valid_ean_numeric(value: u64) -> bool {
    is_valid_mod10_numeric(value, EAN_LIMIT, Weighting::EvenTriple)
}

/// Numeric form of [`crate::checksum::is_valid_isbn13`].
#[deprecated(note = "leading zeros are lost in a numeric value; use `is_valid_isbn13` on the string form")]
pub fn is_valid_isbn13_numeric(value: u64) -> bool {
    is_valid_ean_numeric(value)
}

/// Numeric form of [`crate::checksum::is_valid_isbn10`].
///
/// Weights are assigned from the right here: the last digit weighs 1, the one
/// before it 2, and so on. Combined with the lost leading zeros this makes the
/// result diverge from the string predicate for most inputs.
#[deprecated(note = "leading zeros are lost in a numeric value; use `is_valid_isbn10` on the string form")]
pub fn is_valid_isbn10_numeric(value: u64) -> bool {
    if !in_range(value, ISBN10_LIMIT) {
        return false;
    }

    let n_digits = digit_count(value);
    let mut rest = value;
    let mut sum = 0u64;
    for weight in 1..=u64::from(n_digits) {
        sum += (rest % 10) * weight;
        rest /= 10;
    }
    trace!(value, n_digits, sum, "numeric isbn-10 weighted sum");
    sum % 11 == 0
}
