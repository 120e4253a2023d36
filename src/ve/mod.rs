//! Venezuela.

pub mod rif;
