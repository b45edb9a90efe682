//! Character-class filters applied before shape detection and checksum math.

/// Strips every character outside `[A-Za-z0-9]`.
///
/// Separators such as hyphens and spaces disappear, as does any non-ASCII
/// letter or digit. The result is always safe to measure by byte length.
pub fn normalize(code: &str) -> String {
    code.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Keeps only the ASCII digits of `code`, dropping letters as well.
///
/// Checksum routines run on this form, so a mixed string like `"12A3"` is
/// treated as `"123"` rather than rejected.
pub fn digits(code: &str) -> String {
    code.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` when `code` is non-empty and made only of ASCII digits.
pub fn is_all_digits(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

/// Converts a digit string into numeric digit values.
///
/// Callers must pass the output of [`digits`]; any other byte is skipped.
pub(crate) fn digit_values(digits: &str) -> Vec<u32> {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_symbols() {
        assert_eq!(normalize("978-0-13-468599-1"), "9780134685991");
        assert_eq!(normalize(" B00 X4W-HQ0!4 "), "B00X4WHQ04");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn drops_non_ascii_alphanumerics() {
        assert_eq!(normalize("é12٣4"), "124");
    }

    #[test]
    fn digits_drop_letters_too() {
        assert_eq!(digits("12A3-b4"), "1234");
        assert_eq!(digits("ABC"), "");
    }

    #[test]
    fn all_digits_requires_content() {
        assert!(is_all_digits("0123"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("12a"));
    }

    #[test]
    fn digit_values_map_each_character() {
        assert_eq!(digit_values("4006"), vec![4, 0, 0, 6]);
    }
}
