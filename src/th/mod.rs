//! Thailand.

pub mod moa;
pub mod pin;
pub mod tin;
