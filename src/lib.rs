//! # idnum
//!
//! Validation, normalization and formatting of national identification
//! numbers, tax numbers and a few international identifiers.
//!
//! Every identifier kind lives in its own module (`br::cnpj`, `nl::bsn`,
//! `us::tin`, ...) and offers the same four functions:
//!
//! - `compact` strips separators and whitespace and upcases letters,
//! - `validate` returns the compact form or a [`ValidationError`](core::ValidationError),
//! - `is_valid` is the boolean form of `validate`,
//! - `format` produces the customary printed form.
//!
//! ## Quick Start
//!
//! ```rust
//! use idnum::br::cnpj;
//! use idnum::core::{IdentifierKind, ValidationError};
//!
//! assert_eq!(cnpj::validate("16.727.230/0001-97").unwrap(), "16727230000197");
//! assert_eq!(cnpj::validate("16.727.230/0001-98"), Err(ValidationError::InvalidChecksum));
//! assert_eq!(cnpj::format("16727230000197"), "16.727.230/0001-97");
//!
//! let kind: IdentifierKind = "nl.bsn".parse().unwrap();
//! assert!(kind.is_valid("1112.22.333"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Errors, text cleaning, checksum primitives, registry, FIGI |
//! | `americas` | AR, BR, CL, CO, PE, PY, US, VE |
//! | `europe` | AD, AL, EU (EIC), FI, GB, NL, PT, RO |
//! | `asia` | ID, IN, TH, TW |
//! | `africa` | MU (pulls in `chrono` for birth dates) |
//! | `all` (default) | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod figi;

#[cfg(feature = "americas")]
pub mod ar;
#[cfg(feature = "americas")]
pub mod br;
#[cfg(feature = "americas")]
pub mod cl;
#[cfg(feature = "americas")]
pub mod co;
#[cfg(feature = "americas")]
pub mod pe;
#[cfg(feature = "americas")]
pub mod py;
#[cfg(feature = "americas")]
pub mod us;
#[cfg(feature = "americas")]
pub mod ve;

#[cfg(feature = "europe")]
pub mod ad;
#[cfg(feature = "europe")]
pub mod al;
#[cfg(feature = "europe")]
pub mod eu;
#[cfg(feature = "europe")]
pub mod fi;
#[cfg(feature = "europe")]
pub mod gb;
#[cfg(feature = "europe")]
pub mod nl;
#[cfg(feature = "europe")]
pub mod pt;
#[cfg(feature = "europe")]
pub mod ro;

#[cfg(feature = "asia")]
pub mod id;
#[cfg(feature = "asia")]
pub mod in_;
#[cfg(feature = "asia")]
pub mod th;
#[cfg(feature = "asia")]
pub mod tw;

#[cfg(feature = "africa")]
pub mod mu;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
