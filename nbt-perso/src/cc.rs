// nbt-perso/src/cc.rs
//! Capability container (CC) payload builder.
//!
//! The CC file mirror-encodes the proprietary files' contact-interface
//! permissions in its own fixed record format. The payload is a pure
//! function of the four proprietary-file policies and is regenerated as a
//! whole whenever any policy changes, never patched in place.

use crate::constants::{CC_RECORD_FILE_SIZE, CC_RECORD_HEADER};
use crate::fap::{AccessCondition, FileAccessPolicy};

/// Length of one proprietary-file record in the CC file.
pub const CC_RECORD_LEN: usize = 8;

/// Length of the full CC payload (four records).
pub const CC_PAYLOAD_LEN: usize = 4 * CC_RECORD_LEN;

/// Collapse a file's contact-interface read/write conditions into the CC
/// file's 2-state markers: `Never` becomes 0xFF (denied), anything else
/// becomes 0x00 (granted). The CC format cannot express the full 4-way
/// access model; this lossy mapping is fixed by the device.
pub fn access_summary(policy: &FileAccessPolicy) -> [u8; 2] {
    let collapse = |c: AccessCondition| match c {
        AccessCondition::Never => 0xFF,
        _ => 0x00,
    };
    [
        collapse(policy.contact_read()),
        collapse(policy.contact_write()),
    ]
}

/// Build the CC payload for the four proprietary files, in fixed order.
/// Each record: 3-byte header template, low byte of the file id, 2-byte
/// fixed size field, 2-byte access summary.
pub fn build_cc_payload(
    file1: &FileAccessPolicy,
    file2: &FileAccessPolicy,
    file3: &FileAccessPolicy,
    file4: &FileAccessPolicy,
) -> [u8; CC_PAYLOAD_LEN] {
    let mut payload = [0u8; CC_PAYLOAD_LEN];
    for (slot, policy) in [file1, file2, file3, file4].into_iter().enumerate() {
        let record = &mut payload[slot * CC_RECORD_LEN..(slot + 1) * CC_RECORD_LEN];
        record[..3].copy_from_slice(&CC_RECORD_HEADER);
        record[3] = policy.file_id().low_byte();
        record[4..6].copy_from_slice(&CC_RECORD_FILE_SIZE);
        record[6..8].copy_from_slice(&access_summary(policy));
    }
    payload
}
