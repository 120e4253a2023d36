//! Portugal.

pub mod cc;
