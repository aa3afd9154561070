// nbt-perso/src/flows/interface.rs

use log::debug;

use crate::config::InterfaceConfig;
use crate::constants::{TAG_COMM_IF_ENABLE, TAG_GPIO_FUNCTION};
use crate::protocol::{execute, Command};
use crate::transport::Channel;
use crate::Result;

/// Write the GPIO function and interface-enable configuration through the
/// configurator applet.
pub fn apply_interface_config(channel: &mut dyn Channel, config: &InterfaceConfig) -> Result<()> {
    debug!(
        "configuring interfaces: enable={:#04x} gpio={:#04x}",
        config.enable_byte(),
        config.gpio().byte()
    );
    execute(channel, &Command::SelectConfigurator)?;
    execute(
        channel,
        &Command::SetConfig {
            tag: TAG_GPIO_FUNCTION,
            value: config.gpio().byte(),
        },
    )?;
    execute(
        channel,
        &Command::SetConfig {
            tag: TAG_COMM_IF_ENABLE,
            value: config.enable_byte(),
        },
    )?;
    Ok(())
}
