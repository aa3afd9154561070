// nbt-perso/src/usecase/mod.rs
//! Personalization profiles.
//!
//! A tag is always in exactly one of four states: default, brand
//! protection, connection handover or pass-through. Each profile knows the
//! complete target state (content, key material, policies, interface
//! configuration) and drives the tag there through an already-connected
//! channel. Profiles do not probe the current state first; executing one
//! over any prior state yields the same result.

pub mod brand_protection;
pub mod config;
pub mod default;
pub mod handover;
pub mod pass_through;

pub use brand_protection::BrandProtection;
pub use config::UseCaseConfiguration;
pub use default::DefaultState;
pub use handover::ConnectionHandover;
pub use pass_through::PassThrough;

use crate::transport::Channel;
use crate::Result;

/// A complete personalization profile.
pub trait UseCase {
    /// Drive the tag into this profile's target state. Fail-fast: the
    /// first failing command aborts and leaves the tag partially
    /// personalized.
    fn execute(&self, channel: &mut dyn Channel) -> Result<()>;
}
