// nbt-perso/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockChannel;
pub use traits::Channel;
