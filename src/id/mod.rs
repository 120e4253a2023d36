//! Indonesia.

pub mod npwp;
