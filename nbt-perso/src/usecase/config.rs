// nbt-perso/src/usecase/config.rs

use log::info;

use crate::config::{GpioFunction, InterfaceConfig};
use crate::fap::{FileAccessPolicy, PolicySet};
use crate::flows::{apply_access_policies, apply_interface_config};
use crate::transport::Channel;
use crate::Result;

/// The policy and interface state a profile drives the tag into.
///
/// Built through [`UseCaseConfiguration::builder`]; policy slots not set
/// explicitly stay at their factory defaults. Each builder starts from a
/// fresh default set, so configurations never share policy state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseConfiguration {
    policies: PolicySet,
    interfaces: InterfaceConfig,
}

impl UseCaseConfiguration {
    /// Builder starting from factory defaults.
    pub fn builder() -> UseCaseConfigurationBuilder {
        UseCaseConfigurationBuilder {
            policies: PolicySet::defaults(),
            contactless: true,
            contact: true,
            gpio: GpioFunction::I2cIrq,
        }
    }

    /// Target policy assignment.
    pub fn policies(&self) -> &PolicySet {
        &self.policies
    }

    /// Target interface configuration.
    pub fn interfaces(&self) -> &InterfaceConfig {
        &self.interfaces
    }

    /// Write the configuration to the tag: all seven policies (plus the
    /// derived CC payload), then the interface configuration.
    pub fn apply(&self, channel: &mut dyn Channel) -> Result<()> {
        info!("applying use case configuration");
        apply_access_policies(channel, &self.policies)?;
        apply_interface_config(channel, &self.interfaces)?;
        Ok(())
    }
}

/// Consuming builder for [`UseCaseConfiguration`].
#[derive(Debug, Clone)]
pub struct UseCaseConfigurationBuilder {
    policies: PolicySet,
    contactless: bool,
    contact: bool,
    gpio: GpioFunction,
}

impl UseCaseConfigurationBuilder {
    /// Override the capability container file policy.
    pub fn cc_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.cc = policy;
        self
    }

    /// Override the content file policy.
    pub fn content_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.content = policy;
        self
    }

    /// Override the policy table file policy.
    pub fn table_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.table = policy;
        self
    }

    /// Override the proprietary file 1 policy.
    pub fn file1_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.file1 = policy;
        self
    }

    /// Override the proprietary file 2 policy.
    pub fn file2_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.file2 = policy;
        self
    }

    /// Override the proprietary file 3 policy.
    pub fn file3_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.file3 = policy;
        self
    }

    /// Override the proprietary file 4 policy.
    pub fn file4_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.file4 = policy;
        self
    }

    /// Enable or disable the contactless interface.
    pub fn contactless(mut self, enabled: bool) -> Self {
        self.contactless = enabled;
        self
    }

    /// Enable or disable the contact interface.
    pub fn contact(mut self, enabled: bool) -> Self {
        self.contact = enabled;
        self
    }

    /// Select the GPIO function.
    pub fn gpio(mut self, gpio: GpioFunction) -> Self {
        self.gpio = gpio;
        self
    }

    /// Validates the interface combination; disabling both interfaces is
    /// rejected here, before any channel I/O.
    pub fn build(self) -> Result<UseCaseConfiguration> {
        let interfaces = InterfaceConfig::new(self.contactless, self.contact, self.gpio)?;
        Ok(UseCaseConfiguration {
            policies: self.policies,
            interfaces,
        })
    }
}
