// nbt-perso/src/config.rs
//! Interface and GPIO configuration.

use crate::{Error, Result};

/// GPIO function selection.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GpioFunction {
    /// Output disabled.
    Disabled = 0x01,
    /// RF interrupt output.
    RfIrq = 0x02,
    /// I2C interrupt output.
    I2cIrq = 0x03,
    /// Pass-through mode with RF interrupt output.
    PassThroughRfIrq = 0x04,
}

impl GpioFunction {
    /// Configuration byte written to the GPIO-function tag.
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

/// Which physical interfaces stay enabled after personalization, plus the
/// GPIO function. Disabling both interfaces is rejected at construction:
/// the device's behavior for that combination is undefined and the tag
/// would become unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceConfig {
    contactless: bool,
    contact: bool,
    gpio: GpioFunction,
    enable: u8,
}

impl InterfaceConfig {
    /// Validated configuration; fails when both interfaces are disabled.
    pub fn new(contactless: bool, contact: bool, gpio: GpioFunction) -> Result<Self> {
        let enable = match (contactless, contact) {
            (true, true) => 0x11,
            (true, false) => 0x10,
            (false, true) => 0x01,
            (false, false) => return Err(Error::InterfacesDisabled),
        };
        Ok(Self {
            contactless,
            contact,
            gpio,
            enable,
        })
    }

    /// Whether the contactless interface stays enabled.
    pub fn contactless(&self) -> bool {
        self.contactless
    }

    /// Whether the contact interface stays enabled.
    pub fn contact(&self) -> bool {
        self.contact
    }

    /// Selected GPIO function.
    pub fn gpio(&self) -> GpioFunction {
        self.gpio
    }

    /// Composite interface-enable byte written to the configurator.
    pub fn enable_byte(&self) -> u8 {
        self.enable
    }
}

impl Default for InterfaceConfig {
    /// Both interfaces enabled, I2C interrupt on the GPIO. The factory
    /// configuration.
    fn default() -> Self {
        Self {
            contactless: true,
            contact: true,
            gpio: GpioFunction::I2cIrq,
            enable: 0x11,
        }
    }
}
