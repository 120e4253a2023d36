//! ATIN (U.S. Adoption Taxpayer Identification Number).
//!
//! A temporary nine-digit number issued for children in the process of
//! adoption. Only the `NNN-NN-NNNN` shape is checked.

use crate::core::{Result, ValidationError, clean};

use super::{format_area_group_serial, split_dashed_groups};

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, "-")
}

/// Check if the number is a valid ATIN.
pub fn validate(number: &str) -> Result<String> {
    split_dashed_groups(&clean(number, ""), &[3, 2, 4]).ok_or(ValidationError::InvalidFormat)?;
    Ok(compact(number))
}

/// Check if the number is a valid ATIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format. Input that does
/// not compact to nine digits is returned unchanged.
pub fn format(number: &str) -> String {
    format_area_group_serial(&compact(number), number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_and_invalid() {
        assert_eq!(validate("123-45-6789").unwrap(), "123456789");
        assert_eq!(validate("1234-56789"), Err(ValidationError::InvalidFormat));
        assert_eq!(format("123456789"), "123-45-6789");
    }
}
