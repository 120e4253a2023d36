//! SSN (U.S. Social Security Number).
//!
//! Nine digits in three groups: area, group and serial (`NNN-NN-NNNN`).
//! Dashes are only accepted between the groups.
//!
//! ```
//! use idnum::us::ssn;
//!
//! assert_eq!(ssn::validate("536-90-4399").unwrap(), "536904399");
//! assert_eq!(ssn::format("536904399"), "536-90-4399");
//! ```

use crate::core::{Result, ValidationError, clean};

use super::{format_area_group_serial, split_dashed_groups};

/// Numbers that were published (in advertising, by mistake) and are
/// therefore never valid.
const BLACKLIST: &[&str] = &["078051120", "219099999", "457555462"];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, "-")
}

/// Check if the number is a valid SSN.
pub fn validate(number: &str) -> Result<String> {
    let trimmed = clean(number, "");
    let groups =
        split_dashed_groups(&trimmed, &[3, 2, 4]).ok_or(ValidationError::InvalidFormat)?;
    let (area, group, serial) = (groups[0], groups[1], groups[2]);
    if area == "000" || group == "00" || serial == "0000" {
        return Err(ValidationError::InvalidComponent);
    }
    if area == "666" || area.starts_with('9') {
        return Err(ValidationError::InvalidComponent);
    }
    let number = compact(number);
    if BLACKLIST.contains(&number.as_str()) {
        return Err(ValidationError::InvalidComponent);
    }
    Ok(number)
}

/// Check if the number is a valid SSN.
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
    fn valid_numbers() {
        assert_eq!(validate("536-90-4399").unwrap(), "536904399");
        assert!(is_valid("536904399"));
    }

    #[test]
    fn bad_separators() {
        assert_eq!(validate("1112-23333"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("536 90 4399"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn zero_groups_and_reserved_areas() {
        assert_eq!(validate("000-90-4399"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("536-00-4399"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("536-90-0000"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("666-90-4399"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("912-90-4399"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn blacklisted() {
        assert_eq!(validate("078-05-1120"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn presentation() {
        assert_eq!(format("111223333"), "111-22-3333");
        assert_eq!(format("11122333"), "11122333");
    }
}
