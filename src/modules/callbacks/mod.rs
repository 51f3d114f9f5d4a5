//! Inbound payment notifications: payload types, hash verification and the
//! gateway's error-code tables

pub mod error_codes;
pub mod models;
pub mod verifier;
