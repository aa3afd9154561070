// nbt-perso/src/prelude.rs

pub use crate::config::{GpioFunction, InterfaceConfig};
pub use crate::content::{BrandProtectionEncoder, ConnectionHandoverEncoder, ContentEncoder};
pub use crate::fap::{AccessCondition, FileAccessPolicy, PolicySet};
pub use crate::protocol::{Apdu, ApduResponse, Command};
pub use crate::transport::{Channel, MockChannel};
pub use crate::usecase::{
    BrandProtection, ConnectionHandover, DefaultState, PassThrough, UseCase, UseCaseConfiguration,
};
pub use crate::{ConfigTag, DeviceAddress, Error, FileId, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
