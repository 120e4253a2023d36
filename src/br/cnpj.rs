//! CNPJ (Cadastro Nacional da Pessoa Jurídica, Brazilian company identifier).
//!
//! Fourteen digits: an eight-digit company root, a four-digit branch number
//! and two check digits computed with two passes of a weighted mod-11 sum.
//!
//! ```
//! use idnum::br::cnpj;
//!
//! assert_eq!(cnpj::validate("16.727.230/0001-97").unwrap(), "16727230000197");
//! assert_eq!(cnpj::format("16727230000197"), "16.727.230/0001-97");
//! ```

use crate::core::checksum::{digit_values, weighted_sum};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

const FIRST_WEIGHTS: [i64; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [i64; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Calculate the two check digits over the first twelve digits.
pub fn calc_check_digits(number: &str) -> String {
    let payload: String = number.chars().take(12).collect();
    let d1 = (11 - weighted_sum(&payload, &FIRST_WEIGHTS)).rem_euclid(11) % 10;
    let d2 = (11 - weighted_sum(&format!("{payload}{d1}"), &SECOND_WEIGHTS)).rem_euclid(11) % 10;
    format!("{d1}{d2}")
}

/// Check if the number is a valid CNPJ.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) || digit_values(&number).all(|d| d == 0) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 14 {
        return Err(ValidationError::InvalidLength);
    }
    if number[12..] != calc_check_digits(&number) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid CNPJ.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 14 || !isdigits(&number) {
        return number;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &number[..2],
        &number[2..5],
        &number[5..8],
        &number[8..12],
        &number[12..]
    )
}
