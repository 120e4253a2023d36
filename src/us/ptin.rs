//! PTIN (U.S. Preparer Tax Identification Number).
//!
//! The letter `P` followed by eight digits, issued to paid tax return
//! preparers.

use crate::core::{Result, ValidationError, clean, isdigits};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, "-").to_ascii_uppercase()
}

/// Check if the number is a valid PTIN.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    match number.strip_prefix('P') {
        Some(digits) if digits.len() == 8 && isdigits(digits) => Ok(number),
        _ => Err(ValidationError::InvalidFormat),
    }
}

/// Check if the number is a valid PTIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    compact(number)
}
