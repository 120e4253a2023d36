//! NPWP (Nomor Pokok Wajib Pajak, Indonesian VAT number).
//!
//! The classic form has fifteen digits: nine identifying the taxpayer (the
//! ninth a Luhn check digit), three for the tax office and three for the
//! branch. Since 2024 individuals use their sixteen-digit NIK, which has no
//! check digit.
//!
//! ```
//! use idnum::id::npwp;
//!
//! assert_eq!(npwp::validate("01.300.066.6-091.000").unwrap(), "013000666091000");
//! assert_eq!(npwp::format("013000666091000"), "01.300.066.6-091.000");
//! ```

use crate::core::checksum::{luhn_calc_check_digit, luhn_validate};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Calculate the Luhn check digit for the first eight digits.
pub fn calc_check_digit(number: &str) -> Result<char> {
    luhn_calc_check_digit(number, "0123456789")
}

/// Check if the number is a valid NPWP.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    let len = number.chars().count();
    if len != 15 && len != 16 {
        return Err(ValidationError::InvalidLength);
    }
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if len == 15 {
        luhn_validate(&number[..9])?;
    }
    Ok(number)
}

/// Check if the number is a valid NPWP.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format. Sixteen-digit
/// numbers are printed without separators.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() != 15 || !isdigits(&number) {
        return number;
    }
    format!(
        "{}.{}.{}.{}-{}.{}",
        &number[..2],
        &number[2..5],
        &number[5..8],
        &number[8..9],
        &number[9..12],
        &number[12..]
    )
}
