//! Peru.

pub mod cui;
pub mod ruc;
