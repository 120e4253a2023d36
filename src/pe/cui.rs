//! CUI (Cédula Única de Identidad, Peruvian identity number).
//!
//! The number printed on the DNI card: eight digits, optionally followed by
//! a check character that may be written as a digit or as a letter.

use crate::core::checksum::weighted_sum;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

use super::ruc;

const WEIGHTS: [i64; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Calculate the two accepted check characters: the digit form followed by
/// the letter form.
pub fn calc_check_digits(number: &str) -> String {
    let c = weighted_sum(number, &WEIGHTS).rem_euclid(11) as usize;
    let digit = "65432110987".as_bytes()[c] as char;
    let letter = "KJIHGFEDCBA".as_bytes()[c] as char;
    format!("{digit}{letter}")
}

/// Convert the number to a RUC of kind `10` (natural person).
pub fn to_ruc(number: &str) -> Result<String> {
    let number = validate(number)?;
    let payload = format!("10{}", &number[..8]);
    let check = ruc::calc_check_digit(&payload);
    Ok(format!("{payload}{check}"))
}

/// Check if the number is a valid CUI.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    let len = number.chars().count();
    if len != 8 && len != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !number.is_ascii() || !isdigits(&number[..8]) {
        return Err(ValidationError::InvalidFormat);
    }
    if len == 9 && !calc_check_digits(&number).contains(&number[8..]) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid CUI.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    compact(number)
}
