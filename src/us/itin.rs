//! ITIN (U.S. Individual Taxpayer Identification Number).
//!
//! Nine digits formatted like an SSN. The area always starts with `9` and
//! the group lies in one of the ranges the IRS assigns to ITINs.

use crate::core::{Result, ValidationError, clean};

use super::{format_area_group_serial, split_dashed_groups};

/// Group ranges (inclusive) used for ITINs.
const ALLOWED_GROUPS: &[(u8, u8)] = &[(50, 65), (70, 88), (90, 92), (94, 99)];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, "-")
}

/// Check if the number is a valid ITIN.
pub fn validate(number: &str) -> Result<String> {
    let trimmed = clean(number, "");
    let groups =
        split_dashed_groups(&trimmed, &[3, 2, 4]).ok_or(ValidationError::InvalidFormat)?;
    let group: u8 = groups[1].parse().map_err(|_| ValidationError::InvalidFormat)?;
    if !groups[0].starts_with('9')
        || !ALLOWED_GROUPS
            .iter()
            .any(|(low, high)| (*low..=*high).contains(&group))
    {
        return Err(ValidationError::InvalidComponent);
    }
    Ok(compact(number))
}

/// Check if the number is a valid ITIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format. Input that does
/// not compact to nine digits is returned unchanged.
pub fn format(number: &str) -> String {
    format_area_group_serial(&compact(number), number)
}
