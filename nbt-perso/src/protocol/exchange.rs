// nbt-perso/src/protocol/exchange.rs

use log::trace;

use crate::protocol::apdu::ApduResponse;
use crate::protocol::commands::Command;
use crate::transport::Channel;
use crate::utils::bytes_to_hex;
use crate::Result;

/// One command round trip: build the request, send it, classify the
/// response. No retries at this layer; the first failure propagates to the
/// caller unchanged.
pub fn execute(channel: &mut dyn Channel, command: &Command) -> Result<ApduResponse> {
    let request = command.encode();
    trace!(">> {}", bytes_to_hex(&request));
    let raw = channel.transceive(&request)?;
    trace!("<< {}", bytes_to_hex(&raw));
    let response = ApduResponse::parse(&raw)?;
    response.check_ok()?;
    Ok(response)
}
