//! CC (Número de Cartão de Cidadão, Portuguese identity number).
//!
//! Twelve characters: the eight-digit civil identification number with its
//! check digit, two version characters and a final check digit computed
//! over the whole number with a Luhn-like scheme on a base-36 alphabet.
//!
//! ```
//! use idnum::pt::cc;
//!
//! assert_eq!(cc::validate("00000000 0 ZZ4").unwrap(), "000000000ZZ4");
//! assert_eq!(cc::format("000000000ZZ4"), "00000000 0 ZZ4");
//! ```

use crate::core::checksum::{ALPHANUMERIC, alphabet_index};
use crate::core::{Result, SEPARATORS, ValidationError, clean};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Calculate the check digit over the first eleven characters.
pub fn calc_check_digit(number: &str) -> Result<char> {
    let mut sum: i64 = 0;
    for (i, c) in number.chars().rev().enumerate() {
        let value = i64::from(alphabet_index(ALPHANUMERIC, c)?);
        sum += if i % 2 == 0 {
            let doubled = value * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            value
        };
    }
    Ok(char::from(b'0' + (10 - sum).rem_euclid(10) as u8))
}

/// Digits, then two alphanumeric version characters, then a digit.
fn has_card_shape(number: &str) -> bool {
    let b = number.as_bytes();
    if !number.is_ascii() || b.len() < 3 {
        return false;
    }
    let (head, tail) = b.split_at(b.len() - 3);
    head.iter().all(u8::is_ascii_digit)
        && tail[..2]
            .iter()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        && tail[2].is_ascii_digit()
}

/// Check if the number is a valid CC.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !has_card_shape(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 12 {
        return Err(ValidationError::InvalidLength);
    }
    if number.as_bytes()[11] as char != calc_check_digit(&number[..11])? {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid CC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 12 || !number.is_ascii() {
        return number;
    }
    format!("{} {} {}", &number[..8], &number[8..9], &number[9..])
}
