//! RIF (Registro de Identificación Fiscal, Venezuelan VAT number).
//!
//! A letter for the kind of holder (`V` Venezuelan citizen, `E` foreigner,
//! `J` company, `P` passport, `G` government), eight digits and a check
//! digit. The holder letter contributes a fixed weight to the checksum.

use crate::core::checksum::{check_char, weighted_sum};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Checksum contribution of each holder letter.
const HOLDER_WEIGHTS: &[(char, i64)] = &[('V', 4), ('E', 8), ('J', 12), ('P', 16), ('G', 20)];

const WEIGHTS: [i64; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Convert the number to the minimal representation.
///
/// A leading `VE` country code is dropped when what follows has the length
/// of a RIF.
pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).to_ascii_uppercase();
    match number.strip_prefix("VE") {
        Some(rest) if rest.chars().count() == 10 => rest.trim().to_string(),
        _ => number,
    }
}

fn holder_weight(holder: char) -> Option<i64> {
    HOLDER_WEIGHTS
        .iter()
        .find(|(letter, _)| *letter == holder)
        .map(|(_, weight)| *weight)
}

/// Calculate the check digit from the holder letter and the eight digits.
pub fn calc_check_digit(number: &str) -> Result<char> {
    let number = compact(number);
    let mut chars = number.chars();
    let holder = chars.next().ok_or(ValidationError::InvalidLength)?;
    let weight = holder_weight(holder).ok_or(ValidationError::InvalidComponent)?;
    let digits: String = chars.take(8).collect();
    let sum = weight + weighted_sum(&digits, &WEIGHTS);
    Ok(check_char("00987654321", sum.rem_euclid(11) as usize))
}

/// Check if the number is a valid RIF.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 10 {
        return Err(ValidationError::InvalidLength);
    }
    let holder = number.chars().next().ok_or(ValidationError::InvalidLength)?;
    if holder_weight(holder).is_none() {
        return Err(ValidationError::InvalidComponent);
    }
    if !isdigits(&number[1..]) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.as_bytes()[9] as char != calc_check_digit(&number)? {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid RIF.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 10 || !number.is_ascii() {
        return number;
    }
    format!("{}-{}-{}", &number[..1], &number[1..9], &number[9..])
}
