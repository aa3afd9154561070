// nbt-perso/src/flows/key.rs

use log::debug;

use crate::constants::APDU_CHUNK_SIZE;
use crate::protocol::{execute, Command};
use crate::transport::Channel;
use crate::types::FileId;
use crate::{Error, Result};

/// Write key material into a personalization slot. The material must fit
/// one frame; both the empty and oversized cases are caller errors and are
/// rejected before any channel I/O.
pub fn personalize_key(channel: &mut dyn Channel, slot: FileId, key: &[u8]) -> Result<()> {
    if key.is_empty() {
        return Err(Error::EmptyContent);
    }
    if key.len() > APDU_CHUNK_SIZE {
        return Err(Error::InvalidLength {
            expected: APDU_CHUNK_SIZE,
            actual: key.len(),
        });
    }
    debug!("personalizing slot {:#06x}", slot.as_u16());
    execute(channel, &Command::SelectApplication)?;
    execute(
        channel,
        &Command::PersonalizeData {
            slot,
            data: key.to_vec(),
        },
    )?;
    Ok(())
}
