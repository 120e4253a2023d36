//! Andorra.

pub mod nrt;
