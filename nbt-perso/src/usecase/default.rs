// nbt-perso/src/usecase/default.rs

use log::info;

use crate::flows::{erase_content, is_default_state};
use crate::transport::Channel;
use crate::usecase::{UseCase, UseCaseConfiguration};
use crate::Result;

/// Reset profile: restore factory policies and interface configuration,
/// then wipe the content file. After execution the tag reads back as
/// default state again.
#[derive(Debug, Clone, Default)]
pub struct DefaultState;

impl DefaultState {
    /// Stateless profile; nothing to configure.
    pub fn new() -> Self {
        Self
    }

    /// Probe whether the tag's policy table matches the factory pattern.
    pub fn is_default(channel: &mut dyn Channel) -> Result<bool> {
        is_default_state(channel)
    }
}

impl UseCase for DefaultState {
    fn execute(&self, channel: &mut dyn Channel) -> Result<()> {
        info!("resetting to default state");
        // Policies first so the content file is writable again before the
        // erase.
        UseCaseConfiguration::builder().build()?.apply(channel)?;
        erase_content(channel)
    }
}
