//! Check-digit primitives.
//!
//! These are deliberately small: each identifier module picks the primitive
//! it needs and supplies its own weights and collapse rule. Callers are
//! expected to have checked the character set before summing, the helpers
//! only guard against out-of-alphabet input by returning `InvalidFormat`.

use super::error::{Result, ValidationError};

/// Digits followed by the 26 uppercase ASCII letters.
pub const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric values of the ASCII digits in `number`.
///
/// Non-digit characters count as zero; validate the character set first.
pub fn digit_values(number: &str) -> impl DoubleEndedIterator<Item = i64> + '_ {
    number.chars().map(|c| c.to_digit(10).map_or(0, i64::from))
}

/// Multiply the digits of `number` elementwise with `weights` and sum.
///
/// The shorter of the two sequences decides how many positions are summed.
pub fn weighted_sum(number: &str, weights: &[i64]) -> i64 {
    digit_values(number)
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum()
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Position of `c` in `alphabet`.
pub fn alphabet_index(alphabet: &str, c: char) -> Result<u32> {
    alphabet
        .chars()
        .position(|a| a == c)
        .map(|p| p as u32)
        .ok_or(ValidationError::InvalidFormat)
}

/// Sum of alphabet indices weighted by a descending sequence starting at
/// `first_weight` (so the first character gets `first_weight`, the next
/// `first_weight - 1` and so on).
pub fn descending_weighted_index_sum(
    number: &str,
    alphabet: &str,
    first_weight: u32,
) -> Result<u32> {
    let mut sum = 0;
    for (i, c) in number.chars().enumerate() {
        let weight = first_weight
            .checked_sub(i as u32)
            .ok_or(ValidationError::InvalidLength)?;
        sum += weight * alphabet_index(alphabet, c)?;
    }
    Ok(sum)
}

/// Luhn checksum of `number` over `alphabet`; zero for a valid number.
///
/// Works right to left, doubling every second value and adding the two
/// "digits" of the product in base `alphabet.len()`.
pub fn luhn_checksum(number: &str, alphabet: &str) -> Result<u32> {
    if number.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }
    let n = alphabet.chars().count() as u32;
    let mut sum = 0;
    for (i, c) in number.chars().rev().enumerate() {
        let value = alphabet_index(alphabet, c)?;
        sum += if i % 2 == 0 {
            value
        } else {
            let doubled = value * 2;
            doubled / n + doubled % n
        };
    }
    Ok(sum % n)
}

/// Check that `number` passes the Luhn algorithm over decimal digits.
pub fn luhn_validate(number: &str) -> Result<()> {
    if luhn_checksum(number, "0123456789")? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Compute the Luhn check character to append to `number`.
pub fn luhn_calc_check_digit(number: &str, alphabet: &str) -> Result<char> {
    let zero = alphabet.chars().next().ok_or(ValidationError::InvalidFormat)?;
    let n = alphabet.chars().count() as u32;
    let checksum = luhn_checksum(&format!("{number}{zero}"), alphabet)?;
    let index = ((n - checksum) % n) as usize;
    alphabet.chars().nth(index).ok_or(ValidationError::InvalidFormat)
}

/// Character of `alphabet` at `index`, as used by the table-driven collapse
/// rules (`"0123456789K"[s % 11]` and similar).
pub fn check_char(alphabet: &str, index: usize) -> char {
    alphabet.as_bytes().get(index).map_or('?', |b| char::from(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_known_numbers() {
        assert!(luhn_validate("79927398713").is_ok());
        assert_eq!(
            luhn_validate("79927398710"),
            Err(ValidationError::InvalidChecksum)
        );
        assert_eq!(luhn_validate(""), Err(ValidationError::InvalidFormat));
        assert_eq!(luhn_validate("12a4"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn luhn_check_digit_reconstructs() {
        assert_eq!(luhn_calc_check_digit("7992739871", "0123456789"), Ok('3'));
        assert_eq!(luhn_calc_check_digit("013000666", "0123456789"), Ok('0'));
    }

    #[test]
    fn weighted_sum_stops_at_shorter() {
        assert_eq!(weighted_sum("123", &[1, 1, 1, 1]), 6);
        assert_eq!(weighted_sum("1234", &[2, 3]), 8);
        assert_eq!(weighted_sum("19", &[1, -1]), -8);
    }

    #[test]
    fn digit_sum_casts_out() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(36), 9);
        assert_eq!(digit_sum(18), 9);
    }

    #[test]
    fn descending_weights() {
        // 1*3 + 2*2 + A(10)*1
        assert_eq!(descending_weighted_index_sum("12A", ALPHANUMERIC, 3), Ok(17));
        assert_eq!(
            descending_weighted_index_sum("1$", ALPHANUMERIC, 3),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn check_char_out_of_range_is_placeholder() {
        assert_eq!(check_char("0123456789K", 10), 'K');
        assert_eq!(check_char("01", 5), '?');
    }
}
