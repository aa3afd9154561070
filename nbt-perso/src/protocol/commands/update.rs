// nbt-perso/src/protocol/commands/update.rs

use crate::fap::FileAccessPolicy;
use crate::protocol::apdu::Apdu;

/// UPDATE BINARY at the given offset within the selected file.
pub fn encode_update_binary(offset: u16, data: &[u8]) -> Apdu {
    let [p1, p2] = offset.to_be_bytes();
    Apdu::new(0x00, 0xD6, p1, p2).with_data(data.to_vec())
}

/// Replace one policy table entry with the encoded policy.
pub fn encode_update_policy(policy: &FileAccessPolicy) -> Apdu {
    Apdu::new(0x00, 0xD7, 0x00, 0x00).with_data(policy.encode().to_vec())
}

/// Read back the complete policy table.
pub fn encode_read_policy_table() -> Apdu {
    Apdu::new(0x00, 0xB7, 0x00, 0x00).with_le(0x00)
}
