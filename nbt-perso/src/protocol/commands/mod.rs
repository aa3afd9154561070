// nbt-perso/src/protocol/commands/mod.rs

pub mod config;
pub mod perso;
pub mod select;
pub mod update;

pub use config::encode_set_config;
pub use perso::encode_personalize_data;
pub use select::{encode_select_application, encode_select_configurator, encode_select_file};
pub use update::{encode_read_policy_table, encode_update_binary, encode_update_policy};

use crate::fap::FileAccessPolicy;
use crate::protocol::apdu::Apdu;
use crate::types::{ConfigTag, FileId};

/// High-level command catalogue. New commands should be added here and
/// their encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// Select the personalization applet.
    SelectApplication,
    /// Select the configurator applet.
    SelectConfigurator,
    /// Select an elementary file by id.
    SelectFile { file_id: FileId },
    /// Write data into the selected file at the given offset.
    UpdateBinary { offset: u16, data: Vec<u8> },
    /// Replace one file's entry in the policy table.
    UpdatePolicy { policy: FileAccessPolicy },
    /// Read the complete policy table.
    ReadPolicyTable,
    /// Write one configuration value addressed by tag.
    SetConfig { tag: ConfigTag, value: u8 },
    /// Write key or password material into a personalization slot.
    PersonalizeData { slot: FileId, data: Vec<u8> },
}

impl Command {
    /// Instruction byte as defined by the command catalogue.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::SelectApplication | Self::SelectConfigurator | Self::SelectFile { .. } => 0xA4,
            Self::UpdateBinary { .. } => 0xD6,
            Self::UpdatePolicy { .. } => 0xD7,
            Self::ReadPolicyTable => 0xB7,
            Self::SetConfig { .. } => 0x20,
            Self::PersonalizeData { .. } => 0xE2,
        }
    }

    fn apdu(&self) -> Apdu {
        match self {
            Self::SelectApplication => encode_select_application(),
            Self::SelectConfigurator => encode_select_configurator(),
            Self::SelectFile { file_id } => encode_select_file(*file_id),
            Self::UpdateBinary { offset, data } => encode_update_binary(*offset, data),
            Self::UpdatePolicy { policy } => encode_update_policy(policy),
            Self::ReadPolicyTable => encode_read_policy_table(),
            Self::SetConfig { tag, value } => encode_set_config(*tag, *value),
            Self::PersonalizeData { slot, data } => encode_personalize_data(*slot, data),
        }
    }

    /// Encode the command into raw request bytes.
    pub fn encode(&self) -> Vec<u8> {
        self.apdu().encode()
    }
}
