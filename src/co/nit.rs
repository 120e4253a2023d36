//! NIT (Número De Identificación Tributaria, Colombian identity code).
//!
//! Between 8 and 16 digits, the last being a check digit computed with
//! prime weights from the right.

use crate::core::checksum::{check_char, digit_values};
use crate::core::{Result, ValidationError, clean, isdigits};

const WEIGHTS: [i64; 15] = [3, 7, 13, 17, 19, 23, 29, 37, 41, 43, 47, 53, 59, 67, 71];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, ".,-/ ").to_ascii_uppercase()
}

/// Calculate the check digit for the payload (all digits but the last).
pub fn calc_check_digit(number: &str) -> char {
    let sum: i64 = digit_values(number)
        .rev()
        .zip(WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();
    check_char("01987654321", sum.rem_euclid(11) as usize)
}

/// Check if the number is a valid NIT.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !(8..=16).contains(&number.chars().count()) {
        return Err(ValidationError::InvalidLength);
    }
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    let (payload, check) = number.split_at(number.len() - 1);
    if check.as_bytes()[0] as char != calc_check_digit(payload) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid NIT.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format: the payload in
/// groups of three separated by dots, then a dash and the check digit.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() < 2 || !isdigits(&number) {
        return number;
    }
    let (payload, check) = number.split_at(number.len() - 1);
    let lead = payload.len() % 3;
    let mut groups: Vec<&str> = Vec::new();
    if lead > 0 {
        groups.push(&payload[..lead]);
    }
    groups.extend(
        payload.as_bytes()[lead..]
            .chunks(3)
            .map(|c| std::str::from_utf8(c).unwrap_or_default()),
    );
    format!("{}-{}", groups.join("."), check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert_eq!(validate("213.123.432-1").unwrap(), "2131234321");
        assert!(is_valid("8001972684"));
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(validate("2131234325"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("213123432"), Err(ValidationError::InvalidChecksum));
        assert!(is_valid("21.312.343-7"));
        assert_eq!(validate("1234567"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("21312343A1"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn presentation() {
        assert_eq!(format("2131234321"), "213.123.432-1");
        assert_eq!(format("8001972684"), "800.197.268-4");
        assert_eq!(format("12345678901"), "1.234.567.890-1");
    }
}
