//! Argentina.

pub mod cuit;
