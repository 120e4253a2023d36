//! NRT (Número de Registre Tributari, Andorra tax number).
//!
//! Eight characters: a letter for the kind of holder, six digits and a
//! trailing control letter. There is no published checksum; the holder
//! letter restricts which digit ranges can occur.
//!
//! ```
//! use idnum::ad::nrt;
//!
//! assert_eq!(nrt::validate("U-132950-X").unwrap(), "U132950X");
//! assert_eq!(nrt::format("D059888N"), "D-059888-N");
//! ```

use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Allowed leading letters.
const HOLDER_LETTERS: &str = "ACDEFGLOPU";

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Check if the number is a valid Andorra NRT.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 8 {
        return Err(ValidationError::InvalidLength);
    }
    let digits = digit_block(&number)?;
    let holder = number.as_bytes()[0];
    if !HOLDER_LETTERS.as_bytes().contains(&holder) {
        return Err(ValidationError::InvalidComponent);
    }
    let value: u32 = digits
        .parse()
        .map_err(|_| ValidationError::InvalidFormat)?;
    match holder {
        b'F' if value > 699_999 => Err(ValidationError::InvalidComponent),
        b'A' | b'L' if !(699_999 < value && value < 800_000) => {
            Err(ValidationError::InvalidComponent)
        }
        _ => Ok(number),
    }
}

/// The six digits between the two letters, after checking the shape.
fn digit_block(number: &str) -> Result<&str> {
    let first = number.chars().next();
    let last = number.chars().last();
    match (first, last) {
        (Some(f), Some(l))
            if number.len() > 2 && f.is_ascii_alphabetic() && l.is_ascii_alphabetic() => {}
        _ => return Err(ValidationError::InvalidFormat),
    }
    let digits = &number[1..number.len() - 1];
    if !isdigits(digits) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(digits)
}

/// Check if the number is a valid Andorra NRT.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format.
pub fn format(number: &str) -> String {
    let number = compact(number);
    match digit_block(&number) {
        Ok(digits) if number.len() == 8 => {
            format!("{}-{}-{}", &number[..1], digits, &number[7..])
        }
        _ => number,
    }
}
