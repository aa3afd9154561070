// nbt-perso/src/usecase/handover.rs

use log::info;

use crate::config::GpioFunction;
use crate::constants::{NDEF_FILE, PP1_FILE, PP2_FILE, PP3_FILE, PP4_FILE};
use crate::content::{ConnectionHandoverEncoder, ContentEncoder};
use crate::fap::{AccessCondition::{Always, Never}, FileAccessPolicy};
use crate::flows::write_content;
use crate::transport::Channel;
use crate::types::DeviceAddress;
use crate::usecase::{UseCase, UseCaseConfiguration};
use crate::Result;

/// Local name advertised in the handover record.
const LOCAL_NAME: &str = "NBT";

/// Connection-handover profile: the tag advertises a Bluetooth device
/// address so a phone tap starts pairing. The content file stays readable
/// everywhere but only the contact interface may rewrite it.
#[derive(Debug, Clone)]
pub struct ConnectionHandover {
    encoder: ConnectionHandoverEncoder,
}

impl ConnectionHandover {
    /// Profile advertising the given device address.
    pub fn new(address: DeviceAddress) -> Self {
        Self {
            encoder: ConnectionHandoverEncoder::new(address).with_local_name(LOCAL_NAME),
        }
    }

    /// Parse the address from hex, e.g. `"001122334455"` or
    /// `"00:11:22:33:44:55"`.
    pub fn from_hex(address: &str) -> Result<Self> {
        Ok(Self::new(DeviceAddress::parse_hex(address)?))
    }

    pub(crate) fn configuration() -> Result<UseCaseConfiguration> {
        UseCaseConfiguration::builder()
            .content_policy(FileAccessPolicy::new(NDEF_FILE, Always, Always, Always, Never))
            .file1_policy(FileAccessPolicy::locked(PP1_FILE))
            .file2_policy(FileAccessPolicy::locked(PP2_FILE))
            .file3_policy(FileAccessPolicy::locked(PP3_FILE))
            .file4_policy(FileAccessPolicy::locked(PP4_FILE))
            .gpio(GpioFunction::PassThroughRfIrq)
            .build()
    }
}

impl UseCase for ConnectionHandover {
    fn execute(&self, channel: &mut dyn Channel) -> Result<()> {
        info!(
            "personalizing for connection handover to {}",
            self.encoder.address().to_hex()
        );
        write_content(channel, &self.encoder.encode()?)?;
        Self::configuration()?.apply(channel)
    }
}
