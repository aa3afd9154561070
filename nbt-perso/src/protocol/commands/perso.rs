// nbt-perso/src/protocol/commands/perso.rs

use crate::protocol::apdu::Apdu;
use crate::types::FileId;

/// PERSONALIZE DATA: write key or password material into a slot.
pub fn encode_personalize_data(slot: FileId, data: &[u8]) -> Apdu {
    let [p1, p2] = slot.to_be_bytes();
    Apdu::new(0x00, 0xE2, p1, p2).with_data(data.to_vec())
}
