//! UBN (Unified Business Number, 統一編號, Taiwanese tax number).
//!
//! Eight digits. Each digit is multiplied by `1,2,1,2,1,2,4,1` and the
//! digits of the products are summed. The total must be a multiple of ten;
//! when the seventh digit is `7` its product (28) may be counted either as
//! 10 or as 1, so a total ending in 9 is accepted as well.

use crate::core::checksum::{digit_sum, digit_values};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

const WEIGHTS: [u32; 8] = [1, 2, 1, 2, 1, 2, 4, 1];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// The cast-out weighted sum modulo 10.
pub fn calc_checksum(number: &str) -> u32 {
    digit_values(number)
        .zip(WEIGHTS)
        .map(|(d, w)| digit_sum(d as u32 * w))
        .sum::<u32>()
        % 10
}

/// Calculate the check digit for the first seven digits.
pub fn calc_check_digit(number: &str) -> char {
    let checksum = calc_checksum(&format!("{number}0"));
    char::from(b'0' + ((10 - checksum) % 10) as u8)
}

/// Check if the number is a valid UBN.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 8 {
        return Err(ValidationError::InvalidLength);
    }
    let checksum = calc_checksum(&number);
    if !(checksum == 0 || (checksum == 9 && number.as_bytes()[6] == b'7')) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid UBN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    compact(number)
}
