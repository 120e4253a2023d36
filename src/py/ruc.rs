//! RUC (Registro Único de Contribuyentes, Paraguayan tax number).
//!
//! Up to nine digits, the last being a check digit over increasing weights
//! from the right.
//!
//! ```
//! use idnum::py::ruc;
//!
//! assert_eq!(ruc::validate("80028061-0").unwrap(), "800280610");
//! assert_eq!(ruc::format("800280610"), "80028061-0");
//! ```

use crate::core::checksum::digit_values;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Calculate the check digit for the payload.
pub fn calc_check_digit(number: &str) -> char {
    let sum: i64 = digit_values(number)
        .rev()
        .enumerate()
        .map(|(i, d)| (i as i64 + 2) * d)
        .sum();
    char::from(b'0' + ((-sum).rem_euclid(11) % 10) as u8)
}

/// Check if the number is a valid RUC.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() > 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    let (payload, check) = number.split_at(number.len() - 1);
    if check.as_bytes()[0] as char != calc_check_digit(payload) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid RUC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() < 2 || !isdigits(&number) {
        return number;
    }
    let (payload, check) = number.split_at(number.len() - 1);
    format!("{payload}-{check}")
}
