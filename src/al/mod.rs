//! Albania.

pub mod nipt;
