//! United Kingdom.

pub mod nhs;
