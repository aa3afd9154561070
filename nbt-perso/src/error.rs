// nbt-perso/src/error.rs

use thiserror::Error;

/// Common error type for all personalization operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Channel-level failure. Unrecoverable for the current flow.
    #[error("transport error: {0}")]
    Transport(String),

    /// The tag rejected a command with a non-success status word.
    #[error("command rejected: sw={sw:#06x}")]
    Command {
        /// ISO 7816 status word returned by the tag.
        sw: u16,
    },

    /// A byte slice had the wrong length for the structure it encodes.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A policy table byte is not a known access condition.
    #[error("invalid access condition byte: {0:#04x}")]
    InvalidAccessByte(u8),

    /// Content construction failed (malformed certificate, oversized
    /// record, bad input string).
    #[error("content encoding failed: {0}")]
    Encoding(String),

    /// An operation was handed empty content or key material.
    #[error("content must not be empty")]
    EmptyContent,

    /// Rejected at construction: disabling both interfaces would make the
    /// tag unreachable and the legacy behavior for that combination is
    /// undefined.
    #[error("at least one interface must remain enabled")]
    InterfacesDisabled,

    /// A Bluetooth device address did not decode to exactly 6 bytes.
    #[error("invalid device address: expected 6 bytes, got {actual}")]
    InvalidDeviceAddress {
        /// Number of bytes actually supplied.
        actual: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
