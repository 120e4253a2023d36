//! BSN (Burgerservicenummer, the Dutch citizen identification number).
//!
//! Nine digits (shorter numbers are left-padded with zeros). The digits,
//! weighted 9 down to 2 with the last digit weighted -1, must sum to a
//! multiple of 11 (the "elfproef").
//!
//! ```
//! use idnum::nl::bsn;
//!
//! assert_eq!(bsn::validate("1112.22.333").unwrap(), "111222333");
//! assert_eq!(bsn::format("111222333"), "1112.22.333");
//! ```

use crate::core::checksum::weighted_sum;
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits, zfill};

const WEIGHTS: [i64; 9] = [9, 8, 7, 6, 5, 4, 3, 2, -1];

/// Convert the number to the minimal representation, left-padding it with
/// zeros to nine characters.
pub fn compact(number: &str) -> String {
    zfill(&clean(number, SEPARATORS), 9)
}

/// Weighted sum modulo 11; zero for a valid number.
pub fn checksum(number: &str) -> i64 {
    weighted_sum(number, &WEIGHTS).rem_euclid(11)
}

/// Calculate the check digit for the first eight digits, or `None` when no
/// digit makes the number valid.
pub fn calc_check_digit(number: &str) -> Option<char> {
    let payload = zfill(number, 8);
    let check = weighted_sum(&payload, &WEIGHTS[..8]).rem_euclid(11);
    (check < 10).then(|| char::from(b'0' + check as u8))
}

/// Check if the number is a valid BSN.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) || number.bytes().all(|b| b == b'0') {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if checksum(&number) != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid BSN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 9 || !number.is_ascii() {
        return number;
    }
    format!("{}.{}.{}", &number[..4], &number[4..6], &number[6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elfproef() {
        assert_eq!(validate("111222333").unwrap(), "111222333");
        assert_eq!(validate("111252333"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn too_long() {
        assert_eq!(validate("1112223334"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn short_numbers_are_padded() {
        assert_eq!(compact("1234"), "000001234");
        assert_eq!(validate("00000000"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn check_digit() {
        assert_eq!(calc_check_digit("11122233"), Some('3'));
    }

    #[test]
    fn presentation() {
        assert_eq!(format("111222333"), "1112.22.333");
        assert_eq!(format("1112.22.333"), "1112.22.333");
    }
}
