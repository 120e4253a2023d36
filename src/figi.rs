//! FIGI (Financial Instrument Global Identifier).
//!
//! Twelve characters from the digits and the 21 consonants: two letters,
//! the letter `G`, eight characters and a check digit. The check digit
//! uses a Luhn-like scheme over the decimal expansion of the character
//! values.
//!
//! ```
//! use idnum::figi;
//!
//! assert!(figi::is_valid("BBG000BLNQ16"));
//! assert_eq!(figi::calc_check_digit("BBG000BLNQ1").unwrap(), '6');
//! ```

use crate::core::checksum::{ALPHANUMERIC, alphabet_index, digit_sum};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Characters that may appear in a FIGI.
const FIGI_ALPHABET: &str = "0123456789BCDFGHJKLMNPQRSTVWXYZ";

/// Two-letter prefixes that are never issued, to avoid clashes with ISINs.
const RESERVED_PREFIXES: &[&str] = &["BM", "BS", "GB", "GG", "VG"];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Calculate the check digit over the first eleven characters.
///
/// Every second character value is doubled, then all decimal digits of the
/// resulting numbers are summed.
pub fn calc_check_digit(number: &str) -> Result<char> {
    let mut sum = 0;
    for (i, c) in number.chars().take(11).enumerate() {
        let value = alphabet_index(ALPHANUMERIC, c)?;
        sum += digit_sum(if i % 2 == 1 { value * 2 } else { value });
    }
    Ok(char::from(b'0' + ((10 - sum % 10) % 10) as u8))
}

/// Check if the number is a valid FIGI.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !number.chars().all(|c| FIGI_ALPHABET.contains(c)) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 12 {
        return Err(ValidationError::InvalidLength);
    }
    if isdigits(&number[..1]) || isdigits(&number[1..2]) {
        return Err(ValidationError::InvalidFormat);
    }
    if RESERVED_PREFIXES.contains(&&number[..2]) || &number[2..3] != "G" {
        return Err(ValidationError::InvalidComponent);
    }
    if number.as_bytes()[11] as char != calc_check_digit(&number)? {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid FIGI.
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
    fn valid_number() {
        assert_eq!(validate("BBG000BLNQ16").unwrap(), "BBG000BLNQ16");
        assert!(is_valid("bbg000blnq16"));
    }

    #[test]
    fn separators_are_dropped() {
        assert_eq!(validate("BBG-000-BLN.Q1/6").unwrap(), "BBG000BLNQ16");
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(validate("BBG000BLNQ14"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("BBG000BLNQ1"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("BBG000BLNA16"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("1BG000BLNQ16"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("BSG000BLNQ16"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("BBB000BLNQ16"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn reserved_prefixes_sorted() {
        for window in RESERVED_PREFIXES.windows(2) {
            assert!(window[0] < window[1]);
        }
    }
}
