//! MOA (Thailand Ministry of Commerce business registration number).
//!
//! Thirteen digits starting with `0`; it shares the check digit algorithm
//! of the personal identification number.

use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

use super::pin;

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Calculate the check digit over the first twelve digits.
pub fn calc_check_digit(number: &str) -> char {
    pin::calc_check_digit(number)
}

/// Check if the number is a valid MOA.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 13 {
        return Err(ValidationError::InvalidLength);
    }
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if !number.starts_with('0') {
        return Err(ValidationError::InvalidComponent);
    }
    if number.as_bytes()[12] as char != calc_check_digit(&number) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid MOA.
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
        "{}-{}-{}-{}-{}-{}",
        &number[..1],
        &number[1..3],
        &number[3..4],
        &number[4..7],
        &number[7..12],
        &number[12..]
    )
}
