// nbt-perso/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// File identifier (u16) addressing one of the tag's elementary files or
/// personalization slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId(u16);

impl FileId {
    /// Wrap a raw file id.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Raw id value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// File ids travel big-endian on the wire.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Rebuild a file id from its wire bytes.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Low byte of the id, used by the capability-file record format.
    pub fn low_byte(&self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// Configuration tag (u16) addressed by the configurator applet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigTag(u16);

impl ConfigTag {
    /// Wrap a raw configuration tag.
    pub const fn new(tag: u16) -> Self {
        Self(tag)
    }

    /// Raw tag value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Tags travel big-endian on the wire.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Bluetooth device address, 6 bytes most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceAddress([u8; 6]);

impl DeviceAddress {
    /// Wrap a raw address, most significant byte first.
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Address bytes, most significant byte first.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parse a device address from a hex string (12 hex digits; `:` or `-`
    /// separators and whitespace are accepted). Anything that does not
    /// decode to exactly 6 bytes is rejected before any channel I/O can
    /// happen.
    pub fn parse_hex(s: &str) -> crate::Result<Self> {
        let cleaned: String = s.chars().filter(|c| *c != ':' && *c != '-').collect();
        let bytes = crate::utils::parse_hex(&cleaned)?;
        Self::try_from(&bytes[..])
    }

    /// Lowercase hex rendering without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for DeviceAddress {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 6 {
            return Err(Error::InvalidDeviceAddress {
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(&bytes[..6]);
        Ok(Self(arr))
    }
}
