//! Romania.

pub mod cui;
