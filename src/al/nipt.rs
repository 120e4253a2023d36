//! NIPT (Numri i Identifikimit për Personin e Tatueshëm, Albanian VAT number).
//!
//! Ten characters: a letter (`A`-`M`, encoding the decade of registration),
//! eight digits and a trailing letter. The trailing letter is a check
//! character whose derivation is not public, so only the shape is checked.
//! Numbers may carry an `AL` or `(AL)` prefix.

use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits, strip_country_prefix};

/// Convert the number to the minimal representation, dropping any `AL`
/// prefix.
pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).to_ascii_uppercase();
    strip_country_prefix(&number, &["AL", "(AL)"])
}

/// Check if the number is a valid Albanian NIPT.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 10 {
        return Err(ValidationError::InvalidLength);
    }
    if !number.is_ascii() {
        return Err(ValidationError::InvalidFormat);
    }
    let bytes = number.as_bytes();
    if !(b'A'..=b'M').contains(&bytes[0])
        || !isdigits(&number[1..9])
        || !bytes[9].is_ascii_uppercase()
    {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(number)
}

/// Check if the number is a valid Albanian NIPT.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    compact(number)
}
