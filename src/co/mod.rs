//! Colombia.

pub mod nit;
