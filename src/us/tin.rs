//! TIN (U.S. Taxpayer Identification Number).
//!
//! Umbrella over the number kinds the IRS accepts as a taxpayer
//! identification number: SSN, ITIN, EIN, PTIN and ATIN. Several kinds share
//! the nine-digit shape, so a single number can be acceptable as more than
//! one of them; [`guess_type`] lists every match.
//!
//! ```
//! use idnum::us::tin::{self, TinType};
//!
//! assert_eq!(tin::validate("123-45-6789").unwrap(), "123456789");
//! assert_eq!(tin::tin_type("P-00634642"), Some(TinType::Ptin));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Result, ValidationError, clean};

use super::{atin, ein, itin, ptin, ssn};

/// The kinds of number a U.S. TIN can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TinType {
    Ssn,
    Itin,
    Ein,
    Ptin,
    Atin,
}

impl TinType {
    /// Short lowercase name (`"ssn"`, `"ein"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TinType::Ssn => "ssn",
            TinType::Itin => "itin",
            TinType::Ein => "ein",
            TinType::Ptin => "ptin",
            TinType::Atin => "atin",
        }
    }
}

impl fmt::Display for TinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type SubValidator = fn(&str) -> Result<String>;
type SubFormatter = fn(&str) -> String;

/// Sub-validators in the order they are tried.
const SUB_VALIDATORS: &[(TinType, SubValidator, SubFormatter)] = &[
    (TinType::Ssn, ssn::validate, ssn::format),
    (TinType::Itin, itin::validate, itin::format),
    (TinType::Ein, ein::validate, ein::format),
    (TinType::Ptin, ptin::validate, ptin::format),
    (TinType::Atin, atin::validate, atin::format),
];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, "-").to_ascii_uppercase()
}

/// Check if the number is a valid TIN.
///
/// Returns the compact form produced by the first sub-validator that
/// accepts the number. When none does the error is always
/// `InvalidFormat`; the individual rejections are only logged.
pub fn validate(number: &str) -> Result<String> {
    for (kind, validate, _) in SUB_VALIDATORS {
        match validate(number) {
            Ok(compacted) => {
                tracing::trace!(sub = %kind, "US TIN accepted");
                return Ok(compacted);
            }
            Err(error) => tracing::trace!(sub = %kind, ?error, "US TIN sub-validator rejected number"),
        }
    }
    Err(ValidationError::InvalidFormat)
}

/// Check if the number is a valid TIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Every kind that accepts the number, in dispatch order.
pub fn guess_type(number: &str) -> Vec<TinType> {
    SUB_VALIDATORS
        .iter()
        .filter(|(_, validate, _)| validate(number).is_ok())
        .map(|(kind, _, _)| *kind)
        .collect()
}

/// The first kind that accepts the number.
pub fn tin_type(number: &str) -> Option<TinType> {
    SUB_VALIDATORS
        .iter()
        .find(|(_, validate, _)| validate(number).is_ok())
        .map(|(kind, _, _)| *kind)
}

/// Reformat the number using the presentation of the first kind that
/// accepts it. Anything else is returned unchanged.
pub fn format(number: &str) -> String {
    SUB_VALIDATORS
        .iter()
        .find(|(_, validate, _)| validate(number).is_ok())
        .map_or_else(|| number.to_string(), |(_, _, format)| format(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_digits_match_several_kinds() {
        assert_eq!(
            guess_type("042103594"),
            vec![TinType::Ssn, TinType::Ein, TinType::Atin]
        );
        assert_eq!(tin_type("042103594"), Some(TinType::Ssn));
        assert_eq!(format("042103594"), "042-10-3594");
    }

    #[test]
    fn dash_position_selects_kind() {
        assert_eq!(guess_type("04-2103594"), vec![TinType::Ein]);
        assert_eq!(format("04-2103594"), "04-2103594");
        assert_eq!(guess_type("912-90-3456"), vec![TinType::Itin, TinType::Atin]);
    }

    #[test]
    fn umbrella_error_is_format() {
        assert_eq!(validate("123-456"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("000-00-000A"), Err(ValidationError::InvalidFormat));
        assert!(guess_type("123-456").is_empty());
        assert_eq!(format("123-456"), "123-456");
    }

    #[test]
    fn ptin_is_recognized() {
        assert_eq!(validate("p-00634642").unwrap(), "P00634642");
        assert_eq!(guess_type("P00634642"), vec![TinType::Ptin]);
    }

    #[test]
    fn tin_type_serde_and_display() {
        assert_eq!(serde_json::to_string(&TinType::Itin).unwrap(), "\"itin\"");
        let back: TinType = serde_json::from_str("\"atin\"").unwrap();
        assert_eq!(back, TinType::Atin);
        assert_eq!(TinType::Ein.to_string(), "ein");
    }
}
