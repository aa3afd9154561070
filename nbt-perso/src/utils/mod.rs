//! Utilities: small, reusable helpers used across the crate.
//!
//! Hex conversion for logging and address parsing, plus PEM decoding for
//! the certificate and key material the brand-protection profile writes.

pub mod hex;
pub mod pem;

// Re-export the most common helpers at the `utils` module level so callers
// can use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
pub use pem::*;
