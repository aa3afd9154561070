// nbt-perso/src/fap.rs
//! File access policy (FAP) model.
//!
//! Every managed file carries four access conditions, one per
//! (interface x operation) pair in the fixed order contactless-read,
//! contactless-write, contact-read, contact-write. A policy is only
//! meaningful together with the file id it targets; policies for different
//! files are never interchangeable even when their conditions match.

use crate::constants::{CC_FILE, FAP_FILE, NDEF_FILE};
use crate::types::FileId;
use crate::{Error, Result};

/// Rule controlling whether an operation is permitted.
///
/// The device also knows password- and key-gated conditions; the
/// personalization profiles only ever use these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessCondition {
    /// Access is always granted.
    Always,
    /// Access is always denied.
    Never,
}

impl AccessCondition {
    /// Native byte value stored in the policy table.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Always => 0x40,
            Self::Never => 0x00,
        }
    }

    /// Decode a policy table byte.
    pub fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0x40 => Ok(Self::Always),
            0x00 => Ok(Self::Never),
            other => Err(Error::InvalidAccessByte(other)),
        }
    }

    /// Whether this condition grants access.
    pub fn is_always(self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Per-file, per-interface read/write permission record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileAccessPolicy {
    file_id: FileId,
    contactless_read: AccessCondition,
    contactless_write: AccessCondition,
    contact_read: AccessCondition,
    contact_write: AccessCondition,
}

impl FileAccessPolicy {
    /// Encoded length: 2-byte file id plus 4 condition bytes.
    pub const ENCODED_LEN: usize = 6;

    /// Policy with explicit conditions in the documented order.
    pub const fn new(
        file_id: FileId,
        contactless_read: AccessCondition,
        contactless_write: AccessCondition,
        contact_read: AccessCondition,
        contact_write: AccessCondition,
    ) -> Self {
        Self {
            file_id,
            contactless_read,
            contactless_write,
            contact_read,
            contact_write,
        }
    }

    /// File this policy targets.
    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    /// Condition for reads over the contactless interface.
    pub fn contactless_read(&self) -> AccessCondition {
        self.contactless_read
    }

    /// Condition for writes over the contactless interface.
    pub fn contactless_write(&self) -> AccessCondition {
        self.contactless_write
    }

    /// Condition for reads over the contact interface.
    pub fn contact_read(&self) -> AccessCondition {
        self.contact_read
    }

    /// Condition for writes over the contact interface.
    pub fn contact_write(&self) -> AccessCondition {
        self.contact_write
    }

    /// Encode to the tag's native byte form: file id (big-endian) followed
    /// by the four condition bytes in the documented order.
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let id = self.file_id.to_be_bytes();
        [
            id[0],
            id[1],
            self.contactless_read.byte(),
            self.contactless_write.byte(),
            self.contact_read.byte(),
            self.contact_write.byte(),
        ]
    }

    /// Decode a 6-byte policy entry. Inverse of [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(Error::InvalidLength {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            file_id: FileId::from_be_bytes([bytes[0], bytes[1]]),
            contactless_read: AccessCondition::from_byte(bytes[2])?,
            contactless_write: AccessCondition::from_byte(bytes[3])?,
            contact_read: AccessCondition::from_byte(bytes[4])?,
            contact_write: AccessCondition::from_byte(bytes[5])?,
        })
    }

    /// Factory default for the CC file: readable everywhere, writable
    /// nowhere.
    pub fn default_cc() -> Self {
        use AccessCondition::{Always, Never};
        Self::new(CC_FILE, Always, Never, Always, Never)
    }

    /// Factory default for the NDEF content file: fully open.
    pub fn default_content() -> Self {
        Self::open(NDEF_FILE)
    }

    /// Factory default for the policy table file: fully open.
    pub fn default_table() -> Self {
        Self::open(FAP_FILE)
    }

    /// Fully open policy (all four conditions `Always`). The factory
    /// default for the proprietary files.
    pub fn open(file_id: FileId) -> Self {
        use AccessCondition::Always;
        Self::new(file_id, Always, Always, Always, Always)
    }

    /// Fully locked policy (all four conditions `Never`).
    pub fn locked(file_id: FileId) -> Self {
        use AccessCondition::Never;
        Self::new(file_id, Never, Never, Never, Never)
    }

    /// Transient CC policy that opens contact-interface writes so the CC
    /// payload itself can be rewritten. Applied only inside the
    /// unlock/write/re-lock triad of `flows::apply_access_policies`.
    pub fn cc_unlock() -> Self {
        use AccessCondition::{Always, Never};
        Self::new(CC_FILE, Always, Never, Always, Always)
    }
}

/// The complete policy assignment for all seven managed files. Slots not
/// overridden by a use case stay at their named defaults; defaults are
/// built fresh per set so sessions never alias shared policy state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicySet {
    /// Capability container file policy.
    pub cc: FileAccessPolicy,
    /// NDEF content file policy.
    pub content: FileAccessPolicy,
    /// Policy table file policy.
    pub table: FileAccessPolicy,
    /// Proprietary file 1 policy.
    pub file1: FileAccessPolicy,
    /// Proprietary file 2 policy.
    pub file2: FileAccessPolicy,
    /// Proprietary file 3 policy.
    pub file3: FileAccessPolicy,
    /// Proprietary file 4 policy.
    pub file4: FileAccessPolicy,
}

impl PolicySet {
    /// All seven policies at their factory defaults.
    pub fn defaults() -> Self {
        use crate::constants::{PP1_FILE, PP2_FILE, PP3_FILE, PP4_FILE};
        Self {
            cc: FileAccessPolicy::default_cc(),
            content: FileAccessPolicy::default_content(),
            table: FileAccessPolicy::default_table(),
            file1: FileAccessPolicy::open(PP1_FILE),
            file2: FileAccessPolicy::open(PP2_FILE),
            file3: FileAccessPolicy::open(PP3_FILE),
            file4: FileAccessPolicy::open(PP4_FILE),
        }
    }

    /// Policies in the fixed order the update flow issues them:
    /// CC, content, policy table, proprietary files 1 through 4.
    pub fn in_update_order(&self) -> [&FileAccessPolicy; 7] {
        [
            &self.cc,
            &self.content,
            &self.table,
            &self.file1,
            &self.file2,
            &self.file3,
            &self.file4,
        ]
    }

    /// The four proprietary-file policies the CC payload is derived from.
    pub fn proprietary(&self) -> [&FileAccessPolicy; 4] {
        [&self.file1, &self.file2, &self.file3, &self.file4]
    }
}

impl Default for PolicySet {
    fn default() -> Self {
        Self::defaults()
    }
}
