// nbt-perso/src/protocol/mod.rs
//! APDU protocol layer: request building, response classification and the
//! single-round-trip exchange helper.

pub mod apdu;
pub mod commands;
pub mod exchange;

pub use apdu::{Apdu, ApduResponse};
pub use commands::Command;
pub use exchange::execute;
