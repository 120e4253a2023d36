//! Finnish Association Identifier (yhdistysrekisteritunnus).
//!
//! The register number of a Finnish association: one to six digits without
//! a check digit. Only a fixed set of numbers below 100 was ever issued.

use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Numbers below 100 that exist in the association register. Sorted for
/// binary search.
static LOW_NUMBERS: &[u32] = &[
    1, 6, 7, 9, 12, 14, 15, 16, 18, 22, 23, 24, 27, 28, 29, 35, 36, 38, 40, 41, 42, 43, 45, 46, 47,
    49, 52, 55, 58, 60, 64, 65, 69, 71, 72, 73, 74, 75, 76, 77, 78, 80, 82, 83, 88, 90, 91, 92, 93,
    94, 96, 97, 98, 99,
];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Check if the number is a valid association register number.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() > 6 {
        return Err(ValidationError::InvalidLength);
    }
    if number.len() < 3 {
        let value: u32 = number.parse().map_err(|_| ValidationError::InvalidFormat)?;
        if LOW_NUMBERS.binary_search(&value).is_err() {
            return Err(ValidationError::InvalidComponent);
        }
    }
    Ok(number)
}

/// Check if the number is a valid association register number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format, with a dot
/// before the last three digits.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() <= 3 || !number.is_ascii() {
        return number;
    }
    let (head, tail) = number.split_at(number.len() - 3);
    format!("{head}.{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert_eq!(validate("123.456").unwrap(), "123456");
        assert!(is_valid("1123"));
        assert!(is_valid("12"));
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(validate("123123123"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("12df"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("5"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn presentation() {
        assert_eq!(format("1234"), "1.234");
        assert_eq!(format("123456"), "123.456");
        assert_eq!(format("123"), "123");
    }

    #[test]
    fn low_numbers_sorted() {
        for window in LOW_NUMBERS.windows(2) {
            assert!(window[0] < window[1]);
        }
    }
}
