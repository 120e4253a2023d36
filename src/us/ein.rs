//! EIN (U.S. Employer Identification Number).
//!
//! Nine digits, usually printed as `NN-NNNNNNN`. The two-digit prefix
//! identifies the IRS campus (or online channel) that assigned the number;
//! prefixes that were never assigned are rejected. There is no check digit.
//!
//! ```
//! use idnum::us::ein;
//!
//! assert_eq!(ein::validate("04-2103594").unwrap(), "042103594");
//! assert_eq!(ein::get_campus("04-2103594").unwrap(), "Brookhaven");
//! ```

use crate::core::{Result, ValidationError, clean};

use super::split_dashed_groups;

/// Prefix to assigning campus, per the IRS list of valid EIN prefixes.
/// Prefixes listed under both Philadelphia and the Internet channel are
/// reported as Internet. Sorted by prefix for binary search.
static CAMPUS_BY_PREFIX: &[(&str, &str)] = &[
    ("01", "Brookhaven"),
    ("02", "Brookhaven"),
    ("03", "Brookhaven"),
    ("04", "Brookhaven"),
    ("05", "Brookhaven"),
    ("06", "Brookhaven"),
    ("10", "Andover"),
    ("11", "Brookhaven"),
    ("12", "Andover"),
    ("13", "Brookhaven"),
    ("14", "Brookhaven"),
    ("15", "Fresno"),
    ("16", "Brookhaven"),
    ("20", "Internet"),
    ("21", "Brookhaven"),
    ("22", "Brookhaven"),
    ("23", "Brookhaven"),
    ("24", "Fresno"),
    ("25", "Brookhaven"),
    ("26", "Internet"),
    ("27", "Internet"),
    ("30", "Cincinnati"),
    ("31", "Small Business Administration (SBA)"),
    ("32", "Cincinnati"),
    ("33", "Philadelphia"),
    ("34", "Brookhaven"),
    ("35", "Cincinnati"),
    ("36", "Cincinnati"),
    ("37", "Cincinnati"),
    ("38", "Cincinnati"),
    ("39", "Philadelphia"),
    ("40", "Kansas City"),
    ("41", "Philadelphia"),
    ("42", "Philadelphia"),
    ("43", "Philadelphia"),
    ("44", "Kansas City"),
    ("45", "Internet"),
    ("46", "Internet"),
    ("47", "Internet"),
    ("48", "Philadelphia"),
    ("50", "Austin"),
    ("51", "Brookhaven"),
    ("52", "Brookhaven"),
    ("53", "Austin"),
    ("54", "Brookhaven"),
    ("55", "Brookhaven"),
    ("56", "Brookhaven"),
    ("57", "Brookhaven"),
    ("58", "Brookhaven"),
    ("59", "Brookhaven"),
    ("60", "Atlanta"),
    ("61", "Cincinnati"),
    ("62", "Philadelphia"),
    ("63", "Philadelphia"),
    ("64", "Philadelphia"),
    ("65", "Brookhaven"),
    ("66", "Philadelphia"),
    ("67", "Atlanta"),
    ("68", "Philadelphia"),
    ("71", "Philadelphia"),
    ("72", "Philadelphia"),
    ("73", "Philadelphia"),
    ("74", "Philadelphia"),
    ("75", "Philadelphia"),
    ("76", "Philadelphia"),
    ("77", "Philadelphia"),
    ("80", "Ogden"),
    ("81", "Internet"),
    ("82", "Internet"),
    ("83", "Internet"),
    ("84", "Internet"),
    ("85", "Internet"),
    ("86", "Internet"),
    ("87", "Internet"),
    ("88", "Internet"),
    ("90", "Ogden"),
    ("91", "Philadelphia"),
    ("92", "Internet"),
    ("93", "Internet"),
    ("94", "Memphis"),
    ("95", "Memphis"),
    ("98", "Internet"),
    ("99", "Internet"),
];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, "-")
}

/// Return the name of the campus that assigned the number.
pub fn get_campus(number: &str) -> Result<&'static str> {
    let number = compact(number);
    let prefix = number.get(..2).ok_or(ValidationError::InvalidLength)?;
    CAMPUS_BY_PREFIX
        .binary_search_by(|(p, _)| (*p).cmp(prefix))
        .map(|i| CAMPUS_BY_PREFIX[i].1)
        .map_err(|_| ValidationError::InvalidComponent)
}

/// Check if the number is a valid EIN.
///
/// A dash is only allowed after the two-digit prefix.
pub fn validate(number: &str) -> Result<String> {
    split_dashed_groups(&clean(number, ""), &[2, 7]).ok_or(ValidationError::InvalidFormat)?;
    get_campus(number)?;
    Ok(compact(number))
}

/// Check if the number is a valid EIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation format. Input that does
/// not compact to nine digits is returned unchanged.
pub fn format(number: &str) -> String {
    let compacted = compact(number);
    if compacted.len() != 9 || !compacted.is_ascii() {
        return number.to_string();
    }
    format!("{}-{}", &compacted[..2], &compacted[2..])
}
