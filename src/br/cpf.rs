//! CPF (Cadastro de Pessoas Físicas, Brazilian personal tax number).
//!
//! Eleven digits, the last two being check digits.

use crate::core::checksum::{digit_values, weighted_sum};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

const FIRST_WEIGHTS: [i64; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [i64; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Calculate the two check digits over the first nine digits.
pub fn calc_check_digits(number: &str) -> String {
    let payload: String = number.chars().take(9).collect();
    let d1 = (11 - weighted_sum(&payload, &FIRST_WEIGHTS)).rem_euclid(11) % 10;
    let d2 = (11 - weighted_sum(&format!("{payload}{d1}"), &SECOND_WEIGHTS)).rem_euclid(11) % 10;
    format!("{d1}{d2}")
}

/// Check if the number is a valid CPF.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) || digit_values(&number).all(|d| d == 0) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    if number[9..] != calc_check_digits(&number) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid CPF.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 11 || !isdigits(&number) {
        return number;
    }
    format!(
        "{}.{}.{}-{}",
        &number[..3],
        &number[3..6],
        &number[6..9],
        &number[9..]
    )
}
