//! NHS (United Kingdom National Health Service patient identifier).
//!
//! Ten digits; the last is a mod-11 check digit over the first nine with
//! weights 10 down to 2.

use crate::core::checksum::digit_values;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Weighted sum (1 for the last digit, rising to the left) modulo 11.
pub fn checksum(number: &str) -> i64 {
    digit_values(number)
        .rev()
        .enumerate()
        .map(|(i, d)| (i as i64 + 1) * d)
        .sum::<i64>()
        .rem_euclid(11)
}

/// Calculate the check digit for the first nine digits.
///
/// Returns `None` for payloads that would need a check value of 10; the NHS
/// never issues those.
pub fn calc_check_digit(number: &str) -> Option<char> {
    let sum = checksum(&format!("{number}0"));
    let check = (11 - sum) % 11;
    (check < 10).then(|| char::from(b'0' + check as u8))
}

/// Check if the number is a valid NHS number.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 10 {
        return Err(ValidationError::InvalidLength);
    }
    if checksum(&number) != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid NHS number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 10 || !number.is_ascii() {
        return number;
    }
    format!("{} {} {}", &number[..3], &number[3..6], &number[6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_and_invalid() {
        assert_eq!(validate("943 476 5919").unwrap(), "9434765919");
        assert_eq!(validate("943 476 5910"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("943 476 591"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("943 476 591A"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn check_digit() {
        assert_eq!(calc_check_digit("943476591"), Some('9'));
    }

    #[test]
    fn presentation() {
        assert_eq!(format("9434765919"), "943 476 5919");
    }
}
