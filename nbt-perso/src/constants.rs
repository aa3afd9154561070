// nbt-perso/src/constants.rs
//! Wire-format constants for the NBT product line.
//!
//! These values are fixed by the device; any change breaks interoperability
//! with real tags and the readers that interpret the files afterwards.

use crate::types::{ConfigTag, FileId};

/// Capability container file.
pub const CC_FILE: FileId = FileId::new(0xE103);

/// NDEF content file.
pub const NDEF_FILE: FileId = FileId::new(0xE104);

/// File access policy table file.
pub const FAP_FILE: FileId = FileId::new(0xE1AF);

/// Proprietary file 1.
pub const PP1_FILE: FileId = FileId::new(0xE1A1);

/// Proprietary file 2.
pub const PP2_FILE: FileId = FileId::new(0xE1A2);

/// Proprietary file 3.
pub const PP3_FILE: FileId = FileId::new(0xE1A3);

/// Proprietary file 4.
pub const PP4_FILE: FileId = FileId::new(0xE1A4);

/// Brand master key slot.
pub const BMK_SLOT: FileId = FileId::new(0xA001);

/// Brand signing key slot (EC private key).
pub const BSK_SLOT: FileId = FileId::new(0xA002);

/// Password data slot.
pub const PW_SLOT: FileId = FileId::new(0xA003);

/// Configurator tag selecting which interfaces are enabled.
pub const TAG_COMM_IF_ENABLE: ConfigTag = ConfigTag::new(0xC060);

/// Configurator tag selecting the GPIO function.
pub const TAG_GPIO_FUNCTION: ConfigTag = ConfigTag::new(0xC030);

/// AID of the personalization applet (Type 4 Tag application).
pub const PERSO_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];

/// AID of the configurator applet.
pub const CONFIGURATOR_AID: [u8; 8] = [0xD2, 0x76, 0x00, 0x00, 0x04, 0x15, 0x02, 0x00];

/// ISO 7816 success status word.
pub const SW_SUCCESS: u16 = 0x9000;

/// Maximum data bytes per APDU.
pub const APDU_CHUNK_SIZE: usize = 255;

/// Fixed capacity of the NDEF content file in bytes.
pub const NDEF_FILE_CAPACITY: usize = 850;

/// Offset of the proprietary-file records inside the CC file.
pub const CC_WRITE_OFFSET: u16 = 15;

/// Header template of one proprietary-file record in the CC file.
pub const CC_RECORD_HEADER: [u8; 3] = [0x05, 0x06, 0xE1];

/// Fixed size field of one proprietary-file record in the CC file.
pub const CC_RECORD_FILE_SIZE: [u8; 2] = [0x04, 0x00];

/// Factory-default policy table (7 files x 6 bytes). A tag whose policy
/// table reads back exactly as this pattern is in default state.
pub const DEFAULT_FAP_TABLE: [u8; 42] = [
    0xE1, 0x03, 0x40, 0x00, 0x40, 0x00, // CC: read-only on both interfaces
    0xE1, 0x04, 0x40, 0x40, 0x40, 0x40, // NDEF
    0xE1, 0xA1, 0x40, 0x40, 0x40, 0x40, // proprietary file 1
    0xE1, 0xA2, 0x40, 0x40, 0x40, 0x40, // proprietary file 2
    0xE1, 0xA3, 0x40, 0x40, 0x40, 0x40, // proprietary file 3
    0xE1, 0xA4, 0x40, 0x40, 0x40, 0x40, // proprietary file 4
    0xE1, 0xAF, 0x40, 0x40, 0x40, 0x40, // FAP table itself
];
