// nbt-perso/src/flows/content.rs

use log::debug;

use crate::constants::{APDU_CHUNK_SIZE, NDEF_FILE, NDEF_FILE_CAPACITY};
use crate::protocol::{execute, Command};
use crate::transport::Channel;
use crate::{Error, Result};

/// Write an encoded message into the content file.
///
/// Empty input is a caller error and is rejected before any channel I/O.
pub fn write_content(channel: &mut dyn Channel, message: &[u8]) -> Result<()> {
    if message.is_empty() {
        return Err(Error::EmptyContent);
    }
    debug!("writing {} content bytes", message.len());
    execute(channel, &Command::SelectApplication)?;
    update_content_file(channel, message)
}

/// Overwrite the content file deterministically: fill it with zeros at its
/// fixed capacity, then set the stored length to zero. The transport has
/// no delete primitive, so erase is a full overwrite. Running this twice
/// on an already-erased file produces the same final bytes.
pub fn erase_content(channel: &mut dyn Channel) -> Result<()> {
    debug!("erasing content file");
    execute(channel, &Command::SelectApplication)?;
    update_content_file(channel, &[0u8; NDEF_FILE_CAPACITY])?;
    execute(channel, &Command::SelectFile { file_id: NDEF_FILE })?;
    execute(
        channel,
        &Command::UpdateBinary {
            offset: 0,
            data: vec![0x00, 0x00],
        },
    )?;
    Ok(())
}

/// Select the content file and write a 2-byte big-endian length prefix
/// followed by the message, split into frame-sized update-binary chunks.
fn update_content_file(channel: &mut dyn Channel, message: &[u8]) -> Result<()> {
    if message.len() > NDEF_FILE_CAPACITY {
        return Err(Error::InvalidLength {
            expected: NDEF_FILE_CAPACITY,
            actual: message.len(),
        });
    }

    execute(channel, &Command::SelectFile { file_id: NDEF_FILE })?;

    let mut payload = Vec::with_capacity(message.len() + 2);
    payload.extend_from_slice(&(message.len() as u16).to_be_bytes());
    payload.extend_from_slice(message);

    let mut offset = 0usize;
    for chunk in payload.chunks(APDU_CHUNK_SIZE) {
        execute(
            channel,
            &Command::UpdateBinary {
                offset: offset as u16,
                data: chunk.to_vec(),
            },
        )?;
        offset += chunk.len();
    }
    Ok(())
}
