// nbt-perso/src/protocol/commands/config.rs

use crate::protocol::apdu::Apdu;
use crate::types::ConfigTag;

/// SET CONFIGURATION: write one value addressed by its configurator tag.
pub fn encode_set_config(tag: ConfigTag, value: u8) -> Apdu {
    let [p1, p2] = tag.to_be_bytes();
    Apdu::new(0x00, 0x20, p1, p2).with_data(vec![value])
}
