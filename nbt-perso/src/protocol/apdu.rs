// nbt-perso/src/protocol/apdu.rs

use crate::constants::SW_SUCCESS;
use crate::{Error, Result};

/// ISO 7816-4 command APDU.
/// Format: [CLA] [INS] [P1] [P2] [Lc Data] [Le]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apdu {
    /// Class byte.
    pub cla: u8,
    /// Instruction byte.
    pub ins: u8,
    /// First parameter byte.
    pub p1: u8,
    /// Second parameter byte.
    pub p2: u8,
    /// Command data field; empty means no Lc/data section.
    pub data: Vec<u8>,
    /// Expected response length byte, when present.
    pub le: Option<u8>,
}

impl Apdu {
    /// Header-only APDU with no data field and no Le.
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    /// Attach a command data field. Callers keep payloads within one
    /// short-APDU frame; longer writes are chunked at the flow layer.
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        debug_assert!(data.len() <= crate::constants::APDU_CHUNK_SIZE);
        self.data = data;
        self
    }

    /// Attach an expected-length byte.
    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// Encode into raw request bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + 1 + self.data.len() + 1);
        out.push(self.cla);
        out.push(self.ins);
        out.push(self.p1);
        out.push(self.p2);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            out.push(le);
        }
        out
    }
}

/// Parsed response APDU: optional data followed by a 2-byte status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    /// Response data field, possibly empty.
    pub data: Vec<u8>,
    /// Status word, big-endian on the wire.
    pub sw: u16,
}

impl ApduResponse {
    /// Split raw response bytes into data and status word.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        if raw.len() < 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: raw.len(),
            });
        }
        let (data, sw) = raw.split_at(raw.len() - 2);
        Ok(Self {
            data: data.to_vec(),
            sw: u16::from_be_bytes([sw[0], sw[1]]),
        })
    }

    /// Whether the status word signals success.
    pub fn is_ok(&self) -> bool {
        self.sw == SW_SUCCESS
    }

    /// A response is OK iff its status word equals the success code;
    /// anything else fails with the device's status word attached.
    pub fn check_ok(&self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Command { sw: self.sw })
        }
    }
}
