//! European Union.

pub mod eic;
