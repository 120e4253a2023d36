use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while validating an identifier.
///
/// The set is closed: every validator in this crate reports exactly one of
/// these kinds. The variants carry no payload; the message text is for
/// humans and may change between releases.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Wrong character set, wrong separator placement or wrong overall shape.
    #[error("the number has an invalid format")]
    InvalidFormat,

    /// Correct characters but the wrong number of them.
    #[error("the number has an invalid length")]
    InvalidLength,

    /// Length and shape are correct but the check digit does not match.
    #[error("the number's checksum or check digit is invalid")]
    InvalidChecksum,

    /// A sub-field (prefix, region, entity type, date) holds a value outside
    /// its allowed set.
    #[error("one of the parts of the number is invalid or unknown")]
    InvalidComponent,
}

impl ValidationError {
    /// Returns true if the number was rejected only because its check
    /// digit did not match.
    pub fn is_checksum(&self) -> bool {
        matches!(self, ValidationError::InvalidChecksum)
    }

    /// Returns true if the number was rejected for its shape (format or
    /// length) rather than its content.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidFormat | ValidationError::InvalidLength
        )
    }
}

/// Result type returned by every `validate` function.
pub type Result<T> = std::result::Result<T, ValidationError>;
