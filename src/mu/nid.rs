//! NID (Mauritian National Identifier).
//!
//! Fourteen characters: the first letter of the holder's surname, the birth
//! date as `DDMMYY`, six more characters and a check character computed
//! modulo 17 over a base-36 alphabet.
//!
//! Only a two-digit year is encoded. The century is fixed at 2000, so
//! persons born before 2000 get a birth date one century late; the date is
//! still checked for being a real calendar day.

use chrono::NaiveDate;

use crate::core::checksum::{ALPHANUMERIC, descending_weighted_index_sum};
use crate::core::{Result, SEPARATORS, ValidationError, clean, isdigits};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).to_ascii_uppercase()
}

/// Calculate the check character over the first thirteen characters.
pub fn calc_check_digit(number: &str) -> Result<char> {
    let payload: String = number.chars().take(13).collect();
    let sum = descending_weighted_index_sum(&payload, ALPHANUMERIC, 14)?;
    Ok(ALPHANUMERIC.as_bytes()[(17 - sum % 17) as usize] as char)
}

/// Return the birth date encoded in the number.
pub fn get_date(number: &str) -> Result<NaiveDate> {
    let number = compact(number);
    let field = |range: std::ops::Range<usize>| -> Result<u32> {
        number
            .get(range)
            .filter(|s| isdigits(s))
            .and_then(|s| s.parse().ok())
            .ok_or(ValidationError::InvalidFormat)
    };
    let day = field(1..3)?;
    let month = field(3..5)?;
    let year = field(5..7)?;
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day).ok_or(ValidationError::InvalidComponent)
}

/// A letter, then digits, then a final digit or letter.
fn has_nid_shape(number: &str) -> bool {
    let b = number.as_bytes();
    number.is_ascii()
        && b.len() >= 3
        && b[0].is_ascii_uppercase()
        && b[1..b.len() - 1].iter().all(u8::is_ascii_digit)
        && (b[b.len() - 1].is_ascii_digit() || b[b.len() - 1].is_ascii_uppercase())
}

/// Check if the number is a valid NID.
pub fn validate(number: &str) -> Result<String> {
    let number = compact(number);
    if number.chars().count() != 14 {
        return Err(ValidationError::InvalidLength);
    }
    if !has_nid_shape(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    get_date(&number)?;
    if number.as_bytes()[13] as char != calc_check_digit(&number)? {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Check if the number is a valid NID.
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
        assert_eq!(validate("J2906201304089").unwrap(), "J2906201304089");
        assert!(is_valid("j290620 130408 9"));
    }

    #[test]
    fn birth_date_uses_2000_century() {
        assert_eq!(
            get_date("J2906201304089").unwrap(),
            NaiveDate::from_ymd_opt(2020, 6, 29).unwrap()
        );
    }

    #[test]
    fn date_fields_must_be_plain_digits() {
        assert_eq!(get_date("J+1+620130408X"), Err(ValidationError::InvalidFormat));
        assert_eq!(get_date("J2906"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(validate("J2906201304088"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("J3206201304089"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("J290620130408"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("12906201304089"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn check_digit() {
        assert_eq!(calc_check_digit("J290620130408"), Ok('9'));
    }
}
