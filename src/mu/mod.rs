//! Mauritius.

pub mod nid;
