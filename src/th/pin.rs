//! PIN (Thai Personal Identification Number).
//!
//! Thirteen digits. The first digit gives the registration category and is
//! never `0` (reserved for companies) or `9`; the last is a mod-11 check
//! digit over the first twelve with weights 13 down to 2.
//!
//! ```
//! use idnum::th::pin;
//!
//! assert!(pin::is_valid("3100600445635"));
//! assert_eq!(pin::format("7100600445635"), "7-1006-00445-63-5");
//! ```

use crate::core::checksum::weighted_sum;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

const WEIGHTS: [i64; 12] = [13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Calculate the check digit over the first twelve digits.
pub fn calc_check_digit(number: &str) -> char {
    let check = (11 - weighted_sum(number, &WEIGHTS)).rem_euclid(11) % 10;
    char::from(b'0' + check as u8)
}

/// Check if the number is a valid PIN.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 13 {
        return Err(ValidationError::InvalidLength);
    }
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.starts_with('0') || number.starts_with('9') {
        return Err(ValidationError::InvalidComponent);
    }
    if number.as_bytes()[12] as char != calc_check_digit(&number) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid PIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 13 || !number.is_ascii() {
        return number;
    }
    format!(
        "{}-{}-{}-{}-{}",
        &number[..1],
        &number[1..5],
        &number[5..10],
        &number[10..12],
        &number[12..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_number() {
        assert_eq!(validate("3100600445635").unwrap(), "3100600445635");
        assert!(is_valid("7-1006-00445-63-5"));
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(validate("1234545678789"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("0100600445635"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("9100600445635"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("310060044563"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("31006004456X5"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn presentation() {
        assert_eq!(format("7100600445635"), "7-1006-00445-63-5");
    }
}
