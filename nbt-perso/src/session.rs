// nbt-perso/src/session.rs
//! Channel session bracket.

use log::debug;

use crate::transport::Channel;
use crate::Result;

/// Connect the channel, run `f`, then disconnect. Disconnect happens on
/// every exit path, including when `f` fails; the error from `f` wins.
pub fn run<T>(
    channel: &mut dyn Channel,
    f: impl FnOnce(&mut dyn Channel) -> Result<T>,
) -> Result<T> {
    channel.connect()?;
    debug!("channel connected");
    let result = f(channel);
    channel.disconnect();
    debug!("channel disconnected");
    result
}
