//! CUIT (Código Único de Identificación Tributaria, Argentinian tax number).
//!
//! Eleven digits: a two-digit entity type, an eight-digit document number
//! and a check digit.
//!
//! ```
//! use idnum::ar::cuit;
//!
//! assert!(cuit::is_valid("20-05536168-2"));
//! assert_eq!(cuit::format("20267565393"), "20-26756539-3");
//! ```

use crate::core::checksum::{check_char, weighted_sum};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Entity types: persons (20, 23, 24, 27), companies (30, 33, 34) and
/// international or special registrations (50, 51, 55).
pub const CUIT_TYPES: &[&str] = &["20", "23", "24", "27", "30", "33", "34", "50", "51", "55"];

const WEIGHTS: [i64; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Calculate the check digit over the first ten digits.
pub fn calc_check_digit(number: &str) -> char {
    let check = weighted_sum(number, &WEIGHTS).rem_euclid(11) as usize;
    check_char("012345678990", 11 - check)
}

/// Check if the number is a valid CUIT.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    if !CUIT_TYPES.contains(&&number[..2]) {
        return Err(ValidationError::InvalidComponent);
    }
    if number.as_bytes()[10] as char != calc_check_digit(&number[..10]) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid CUIT.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 11 || !isdigits(&number) {
        return number;
    }
    format!("{}-{}-{}", &number[..2], &number[2..10], &number[10..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert_eq!(validate("20-05536168-2").unwrap(), "20055361682");
        assert!(is_valid("20267565393"));
        assert!(is_valid("30-50001091-2"));
    }

    #[test]
    fn check_digit() {
        assert_eq!(calc_check_digit("2026756539"), '3');
        assert_eq!(validate("20267565392"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn rejects_unknown_entity_type() {
        assert_eq!(validate("41267565393"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn rejects_shape() {
        assert_eq!(validate("2026756539A"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("2026756539"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn presentation() {
        assert_eq!(format("20267565393"), "20-26756539-3");
    }

    #[test]
    fn type_table_sorted() {
        for window in CUIT_TYPES.windows(2) {
            assert!(window[0] < window[1]);
        }
    }
}
