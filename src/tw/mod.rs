//! Taiwan.

pub mod ubn;
