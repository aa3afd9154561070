// nbt-perso/src/usecase/pass_through.rs

use log::info;

use crate::transport::Channel;
use crate::usecase::{handover::ConnectionHandover, UseCase, UseCaseConfiguration};
use crate::Result;

/// Pass-through profile: APDUs arriving on the contactless interface are
/// tunneled to the host over the contact interface, with the GPIO raising
/// an interrupt per frame. Same policy assignment as connection handover,
/// but no content is written; the host decides what the tag answers.
#[derive(Debug, Clone, Default)]
pub struct PassThrough;

impl PassThrough {
    /// Stateless profile; nothing to configure.
    pub fn new() -> Self {
        Self
    }

    fn configuration() -> Result<UseCaseConfiguration> {
        ConnectionHandover::configuration()
    }
}

impl UseCase for PassThrough {
    fn execute(&self, channel: &mut dyn Channel) -> Result<()> {
        info!("personalizing for pass-through");
        Self::configuration()?.apply(channel)
    }
}
