//! RUT (Rol Único Tributario, Chilean national tax number).
//!
//! Seven or eight digits followed by a check character that is a digit or
//! `K`. Numbers may be prefixed with `CL`.
//!
//! ```
//! use idnum::cl::rut;
//!
//! assert_eq!(rut::validate("CL 12531909-2").unwrap(), "125319092");
//! assert_eq!(rut::format("125319092"), "12.531.909-2");
//! ```

use crate::core::checksum::digit_values;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits, strip_country_prefix};

/// Convert the number to the minimal representation, dropping any `CL`
/// prefix.
pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).to_ascii_uppercase();
    strip_country_prefix(&number, &["CL"])
}

/// Calculate the check character for the digits of the number.
///
/// Weights cycle through 9, 8, 7, 6, 5, 4 from the rightmost digit.
pub fn calc_check_digit(number: &str) -> char {
    let sum: i64 = digit_values(number)
        .rev()
        .enumerate()
        .map(|(i, d)| d * (4 + (5 - i as i64).rem_euclid(6)))
        .sum();
    let index = sum.rem_euclid(11) as usize;
    "0123456789K".as_bytes()[index] as char
}

/// Check if the number is a valid RUT.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    let len = number.chars().count();
    if len != 8 && len != 9 {
        return Err(ValidationError::InvalidLength);
    }
    let Some(check) = number.chars().last() else {
        return Err(ValidationError::InvalidLength);
    };
    let payload = &number[..number.len() - check.len_utf8()];
    if !isdigits(payload) {
        return Err(ValidationError::InvalidFormat);
    }
    if check != calc_check_digit(payload) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid RUT.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if !number.is_ascii() || !(8..=9).contains(&number.len()) {
        return number;
    }
    let n = number.len();
    format!(
        "{}.{}.{}-{}",
        &number[..n - 7],
        &number[n - 7..n - 4],
        &number[n - 4..n - 1],
        &number[n - 1..]
    )
}
