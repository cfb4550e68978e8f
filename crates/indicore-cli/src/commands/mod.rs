//! CLI command implementations.

pub mod describe;
pub mod fingerprint;
pub mod list;
pub mod validate;
