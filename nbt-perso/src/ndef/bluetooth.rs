// nbt-perso/src/ndef/bluetooth.rs

use crate::ndef::record::{NdefRecord, TNF_MEDIA};
use crate::types::DeviceAddress;
use crate::{Error, Result};

/// MIME type of the Bluetooth secure-simple-pairing OOB record.
pub const BT_OOB_MIME_TYPE: &str = "application/vnd.bluetooth.ep.oob";

/// EIR data type: complete local name.
const EIR_COMPLETE_LOCAL_NAME: u8 = 0x09;

/// Build the Bluetooth OOB media record used for connection handover:
/// a little-endian total length, the device address in wire order (least
/// significant byte first) and optionally a complete-local-name EIR
/// structure.
pub fn bluetooth_record(address: &DeviceAddress, local_name: Option<&str>) -> Result<NdefRecord> {
    // Length placeholder, patched once the payload is complete
    let mut payload = vec![0u8, 0u8];

    let mut wire_address = *address.as_bytes();
    wire_address.reverse();
    payload.extend_from_slice(&wire_address);

    if let Some(name) = local_name {
        if name.len() > 254 {
            return Err(Error::Encoding("local name too long".to_string()));
        }
        payload.push(name.len() as u8 + 1);
        payload.push(EIR_COMPLETE_LOCAL_NAME);
        payload.extend_from_slice(name.as_bytes());
    }

    let total = payload.len() as u16;
    payload[..2].copy_from_slice(&total.to_le_bytes());

    Ok(NdefRecord::new(
        TNF_MEDIA,
        BT_OOB_MIME_TYPE.as_bytes().to_vec(),
        payload,
    ))
}
