//! EPIC (Electoral Photo Identity Card, Indian voter ID).
//!
//! Three letters followed by seven digits; the last digit is a Luhn check
//! digit over the digit block.

use crate::core::checksum::{luhn_calc_check_digit, luhn_validate};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Calculate the check digit for the first six digits of the digit block.
pub fn calc_check_digit(number: &str) -> Result<char> {
    luhn_calc_check_digit(number, "0123456789")
}

/// Check if the number is a valid EPIC number.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 10 {
        return Err(ValidationError::InvalidLength);
    }
    if !number.is_ascii()
        || !number[..3].bytes().all(|b| b.is_ascii_uppercase())
        || !isdigits(&number[3..])
    {
        return Err(ValidationError::InvalidFormat);
    }
    luhn_validate(&number[3..])?;
    Ok(number)
}

/// Check if the number is a valid EPIC number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    compact(number)
}
