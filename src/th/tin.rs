//! TIN (Thailand Taxpayer Identification Number).
//!
//! Thai taxpayers are identified either by their personal identification
//! number (PIN) or, for companies, by their Ministry of Commerce
//! registration number (MOA). Both are thirteen digits; this module tries
//! each in turn.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Result, SEPARATORS, ValidationError, clean};

use super::{moa, pin};

/// The kind of number a Thai TIN turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TinType {
    /// Personal identification number.
    Pin,
    /// Ministry of Commerce business registration number.
    Moa,
}

impl TinType {
    /// Short lowercase name (`"pin"`, `"moa"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TinType::Pin => "pin",
            TinType::Moa => "moa",
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
    (TinType::Pin, pin::validate, pin::format),
    (TinType::Moa, moa::validate, moa::format),
];

/// Convert the number to the minimal representation.
pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS)
}

/// Every kind that accepts the number, in dispatch order. PIN and MOA
/// differ in their leading digit, so this holds at most one kind.
pub fn guess_type(number: &str) -> Vec<TinType> {
    SUB_VALIDATORS
        .iter()
        .filter(|(_, validate, _)| validate(number).is_ok())
        .map(|(kind, _, _)| *kind)
        .collect()
}

/// Return the kind of TIN, or `None` if neither sub-validator accepts it.
pub fn tin_type(number: &str) -> Option<TinType> {
    SUB_VALIDATORS
        .iter()
        .find(|(_, validate, _)| validate(number).is_ok())
        .map(|(kind, _, _)| *kind)
}

/// Check if the number is a valid TIN.
///
/// Returns the compact form from the first sub-validator that accepts the
/// number; if none does, the result is always `InvalidFormat`.
pub fn validate(number: &str) -> Result<String> {
    for (kind, validate, _) in SUB_VALIDATORS {
        match validate(number) {
            Ok(compacted) => return Ok(compacted),
            Err(error) => tracing::trace!(sub = %kind, ?error, "thai TIN sub-validator rejected number"),
        }
    }
    Err(ValidationError::InvalidFormat)
}

/// Check if the number is a valid TIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number using the presentation of whichever kind accepts
/// it. Numbers no sub-validator accepts are returned unchanged.
pub fn format(number: &str) -> String {
    SUB_VALIDATORS
        .iter()
        .find(|(_, validate, _)| validate(number).is_ok())
        .map_or_else(|| number.to_string(), |(_, _, format)| format(number))
}
