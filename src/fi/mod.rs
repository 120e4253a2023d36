//! Finland.

pub mod associationid;
