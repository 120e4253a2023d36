//! India.

pub mod epic;
