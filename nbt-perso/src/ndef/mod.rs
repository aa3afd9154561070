// nbt-perso/src/ndef/mod.rs
//! Minimal NDEF binary encoder.
//!
//! Covers exactly the record shapes the personalization profiles write:
//! well-known URI records, external-type records and the Bluetooth OOB
//! media record. Decoding is not needed; the tag's files are write-only
//! from this crate's point of view.

pub mod bluetooth;
pub mod record;
pub mod uri;

pub use bluetooth::bluetooth_record;
pub use record::{encode_message, NdefRecord};
pub use uri::uri_record;
