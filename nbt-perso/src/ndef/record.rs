// nbt-perso/src/ndef/record.rs

use crate::{Error, Result};

/// TNF: NFC Forum well-known type.
pub const TNF_WELL_KNOWN: u8 = 0x01;

/// TNF: media type (RFC 2046 MIME).
pub const TNF_MEDIA: u8 = 0x02;

/// TNF: external type.
pub const TNF_EXTERNAL: u8 = 0x04;

const FLAG_MESSAGE_BEGIN: u8 = 0x80;
const FLAG_MESSAGE_END: u8 = 0x40;
const FLAG_SHORT_RECORD: u8 = 0x10;
const FLAG_ID_PRESENT: u8 = 0x08;

/// One NDEF record: type name format, type, optional id, payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    /// Type name format, low 3 bits of the flags byte.
    pub tnf: u8,
    /// Record type, interpreted per the TNF.
    pub record_type: Vec<u8>,
    /// Optional record id; empty means absent.
    pub id: Vec<u8>,
    /// Record payload.
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Record without an id.
    pub fn new(tnf: u8, record_type: Vec<u8>, payload: Vec<u8>) -> Self {
        Self {
            tnf,
            record_type,
            id: Vec::new(),
            payload,
        }
    }

    /// Attach a record id; sets the id-length field and IL flag.
    pub fn with_id(mut self, id: Vec<u8>) -> Self {
        self.id = id;
        self
    }

    fn encode_into(&self, out: &mut Vec<u8>, first: bool, last: bool) -> Result<()> {
        if self.record_type.len() > 255 {
            return Err(Error::Encoding("record type too long".to_string()));
        }
        if self.id.len() > 255 {
            return Err(Error::Encoding("record id too long".to_string()));
        }

        let short = self.payload.len() < 256;
        let mut flags = self.tnf & 0x07;
        if first {
            flags |= FLAG_MESSAGE_BEGIN;
        }
        if last {
            flags |= FLAG_MESSAGE_END;
        }
        if short {
            flags |= FLAG_SHORT_RECORD;
        }
        if !self.id.is_empty() {
            flags |= FLAG_ID_PRESENT;
        }

        out.push(flags);
        out.push(self.record_type.len() as u8);
        if short {
            out.push(self.payload.len() as u8);
        } else {
            out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        }
        if !self.id.is_empty() {
            out.push(self.id.len() as u8);
        }
        out.extend_from_slice(&self.record_type);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.payload);
        Ok(())
    }
}

/// Encode records into one NDEF message. The first record carries the
/// message-begin flag, the last the message-end flag.
pub fn encode_message(records: &[NdefRecord]) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(Error::Encoding("message must contain a record".to_string()));
    }
    let mut out = Vec::new();
    let last_index = records.len() - 1;
    for (i, record) in records.iter().enumerate() {
        record.encode_into(&mut out, i == 0, i == last_index)?;
    }
    Ok(out)
}
