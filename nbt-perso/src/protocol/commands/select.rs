// nbt-perso/src/protocol/commands/select.rs

use crate::constants::{CONFIGURATOR_AID, PERSO_AID};
use crate::protocol::apdu::Apdu;
use crate::types::FileId;

/// SELECT by AID: the personalization applet.
pub fn encode_select_application() -> Apdu {
    Apdu::new(0x00, 0xA4, 0x04, 0x00)
        .with_data(PERSO_AID.to_vec())
        .with_le(0x00)
}

/// SELECT by AID: the configurator applet.
pub fn encode_select_configurator() -> Apdu {
    Apdu::new(0x00, 0xA4, 0x04, 0x00)
        .with_data(CONFIGURATOR_AID.to_vec())
        .with_le(0x00)
}

/// SELECT by file id within the current applet.
pub fn encode_select_file(file_id: FileId) -> Apdu {
    Apdu::new(0x00, 0xA4, 0x00, 0x0C).with_data(file_id.to_be_bytes().to_vec())
}
