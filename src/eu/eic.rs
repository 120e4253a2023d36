//! EIC (European Energy Identification Code).
//!
//! Sixteen characters from `0-9`, `A-Z` and `-`: a two-digit issuing office,
//! an object-type letter, twelve characters of identifier and a check
//! character. The check uses the position of each character in a 37-symbol
//! alphabet, weighted 16 down to 2.
//!
//! ```
//! use idnum::eu::eic;
//!
//! assert!(eic::is_valid("22XWATTPLUS----G"));
//! assert_eq!(eic::calc_check_digit("22XWATTPLUS----").unwrap(), 'G');
//! ```

use crate::core::checksum::descending_weighted_index_sum;
use crate::core::{Result, ValidationError, clean, isdigits};

const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-";

/// Convert the number to the minimal representation. Spaces, dots and
/// slashes are removed; dashes are part of the code and are kept.
pub fn compact(number: &str) -> String {
    clean(number, " ./").to_ascii_uppercase()
}

/// Calculate the check character over the first fifteen characters.
pub fn calc_check_digit(number: &str) -> Result<char> {
    let payload: String = compact(number).chars().take(15).collect();
    let sum = descending_weighted_index_sum(&payload, ALPHABET, 16)?;
    let index = 36 - (sum as i64 - 1).rem_euclid(37);
    Ok(ALPHABET.as_bytes()[index as usize] as char)
}

/// Check if the number is a valid EIC.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !number.chars().all(|c| ALPHABET.contains(c)) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 16 {
        return Err(ValidationError::InvalidLength);
    }
    if !isdigits(&number[..2]) || number.ends_with('-') {
        return Err(ValidationError::InvalidFormat);
    }
    if number.as_bytes()[15] as char != calc_check_digit(&number)? {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid EIC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    compact(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert_eq!(validate("22XWATTPLUS----G").unwrap(), "22XWATTPLUS----G");
        assert!(is_valid("22xwattplus----g"));
        assert!(is_valid("10YDE-RWENET---I"));
        assert!(is_valid("10YDE-EON------1"));
    }

    #[test]
    fn separators_other_than_dash_are_dropped() {
        assert_eq!(validate("22X.WATT/PLUS----G").unwrap(), "22XWATTPLUS----G");
        assert_eq!(compact("10YDE-EON------1"), "10YDE-EON------1");
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(validate("22XWATTPLUS----X"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("22XWATTPLUS----"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("22XWATTPLUS---_G"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("A2XWATTPLUS----G"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("22XWATTPLUS-----"), Err(ValidationError::InvalidFormat));
    }
}
