//! Shared building blocks: the error type, text cleaning, check-digit
//! primitives and the registry of identifier kinds.

pub mod checksum;
mod error;
mod registry;
mod util;

pub use error::*;
pub use registry::*;
pub use util::{SEPARATORS, clean, isdigits};

#[cfg(any(feature = "americas", feature = "europe"))]
pub(crate) use util::strip_country_prefix;
#[cfg(feature = "europe")]
pub(crate) use util::zfill;
