// nbt-perso/src/lib.rs

//! nbt-perso
//!
//! Pure Rust personalization library for NBT smart tags: access policy
//! management, interface configuration and NDEF content encoding over an
//! APDU channel supplied by the caller.
#![warn(missing_docs)]

pub mod cc;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod fap;
pub mod flows;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod usecase;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
