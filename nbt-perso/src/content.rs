// nbt-perso/src/content.rs
//! NDEF content encoders for the personalization profiles.
//!
//! Each encoder produces the complete NDEF message a profile writes into
//! the content file. The encoders are pure; writing the result to a tag
//! goes through [`flows::write_content`](crate::flows::write_content).

use crate::ndef::{bluetooth_record, encode_message, uri_record, NdefRecord};
use crate::ndef::record::TNF_EXTERNAL;
use crate::types::DeviceAddress;
use crate::{Error, Result};

/// External record type carrying the brand-protection X.509 certificate.
pub const CERT_RECORD_TYPE: &str =
    "infineon technologies:infineon.com:nfc-bridge-tag.x509";

/// Leading tag of DER-encoded certificates.
const DER_SEQUENCE_TAG: u8 = 0x30;

/// Anything that can render itself into the bytes of an NDEF message.
pub trait ContentEncoder {
    /// Produce the complete NDEF message.
    fn encode(&self) -> Result<Vec<u8>>;
}

/// Content for the brand-protection profile: a verification URI followed
/// by the product certificate in an external-type record.
#[derive(Debug, Clone)]
pub struct BrandProtectionEncoder {
    url: String,
    certificate: Vec<u8>,
}

impl BrandProtectionEncoder {
    /// The certificate must be DER encoded; PEM input goes through
    /// [`utils::certificate_from_pem`](crate::utils::certificate_from_pem)
    /// first.
    pub fn new(url: impl Into<String>, certificate: Vec<u8>) -> Result<Self> {
        if certificate.is_empty() {
            return Err(Error::EmptyContent);
        }
        if certificate.first() != Some(&DER_SEQUENCE_TAG) {
            return Err(Error::Encoding(
                "certificate is not DER encoded".to_string(),
            ));
        }
        Ok(Self {
            url: url.into(),
            certificate,
        })
    }

    /// Verification URL written to the tag.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContentEncoder for BrandProtectionEncoder {
    fn encode(&self) -> Result<Vec<u8>> {
        let uri = uri_record(&self.url);
        let cert = NdefRecord::new(
            TNF_EXTERNAL,
            CERT_RECORD_TYPE.as_bytes().to_vec(),
            self.certificate.clone(),
        )
        .with_id(vec![0x00]);
        encode_message(&[uri, cert])
    }
}

/// Content for the connection-handover profile: a single Bluetooth OOB
/// record announcing the device address.
#[derive(Debug, Clone)]
pub struct ConnectionHandoverEncoder {
    address: DeviceAddress,
    local_name: Option<String>,
}

impl ConnectionHandoverEncoder {
    /// Encoder for the given device address, without a local name.
    pub fn new(address: DeviceAddress) -> Self {
        Self {
            address,
            local_name: None,
        }
    }

    /// Advertise a complete local name alongside the address.
    pub fn with_local_name(mut self, name: impl Into<String>) -> Self {
        self.local_name = Some(name.into());
        self
    }

    /// Advertised device address.
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }
}

impl ContentEncoder for ConnectionHandoverEncoder {
    fn encode(&self) -> Result<Vec<u8>> {
        let record = bluetooth_record(&self.address, self.local_name.as_deref())?;
        encode_message(&[record])
    }
}
