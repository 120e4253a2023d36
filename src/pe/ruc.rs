//! RUC (Registro Único de Contribuyentes, Peruvian company tax number).
//!
//! Eleven digits: a two-digit kind (`10` for persons, whose RUC embeds
//! their DNI, `15`/`17` for special registrations, `20` for companies),
//! eight digits and a check digit.

use crate::core::checksum::weighted_sum;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Allowed two-digit kinds.
pub const RUC_TYPES: &[&str] = &["10", "15", "17", "20"];

const WEIGHTS: [i64; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Calculate the check digit over the first ten digits.
pub fn calc_check_digit(number: &str) -> char {
    let check = (11 - weighted_sum(number, &WEIGHTS).rem_euclid(11)) % 10;
    char::from(b'0' + check as u8)
}

/// Return the DNI (personal identity number) embedded in a person's RUC.
///
/// Only RUCs of kind `10` carry a DNI; anything else is an
/// `InvalidComponent`.
pub fn to_dni(number: &str) -> Result<String> {
    let number = validate(number)?;
    if !number.starts_with("10") {
        return Err(ValidationError::InvalidComponent);
    }
    Ok(number[2..10].to_string())
}

/// Check if the number is a valid RUC.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if !RUC_TYPES.contains(&&number[..2]) {
        return Err(ValidationError::InvalidComponent);
    }
    if number.as_bytes()[10] as char != calc_check_digit(&number[..10]) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid RUC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format (the compact
/// form; RUCs are printed without separators).
pub fn format(number: &str) -> String {
    compact(number)
}
