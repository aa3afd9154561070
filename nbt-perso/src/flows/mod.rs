// nbt-perso/src/flows/mod.rs
//! Composite command flows.
//!
//! Each flow is an ordered, fail-fast sequence of command round trips: the
//! first failing step aborts the flow and propagates its error unchanged.
//! No rollback is attempted; the tag keeps whatever state the last
//! successful step produced.

pub mod content;
pub mod interface;
pub mod key;
pub mod policy;

pub use content::{erase_content, write_content};
pub use interface::apply_interface_config;
pub use key::personalize_key;
pub use policy::{apply_access_policies, is_default_state, read_policy_table};
