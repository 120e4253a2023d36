//! CUI or CIF (Codul Unic de Înregistrare, Romanian company identifier).
//!
//! Two to ten digits without a leading zero; the last digit is a check
//! digit. The VAT form of the number carries an `RO` prefix, which is
//! dropped when compacting.

use crate::core::checksum::weighted_sum;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits, strip_country_prefix, zfill};

const WEIGHTS: [i64; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

/// Convert the number to the minimal representation, dropping any `RO`
/// prefix.
pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).to_ascii_uppercase();
    strip_country_prefix(&number, &["RO"])
}

/// Calculate the check digit for the payload (up to nine digits).
pub fn calc_check_digit(number: &str) -> char {
    let check = 10 * weighted_sum(&zfill(number, 9), &WEIGHTS);
    char::from(b'0' + (check.rem_euclid(11) % 10) as u8)
}

/// Check if the number is a valid CUI.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) || number.starts_with('0') {
        return Err(ValidationError::InvalidFormat);
    }
    if !(2..=10).contains(&number.len()) {
        return Err(ValidationError::InvalidLength);
    }
    let (payload, check) = number.split_at(number.len() - 1);
    if check.as_bytes()[0] as char != calc_check_digit(payload) {
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
