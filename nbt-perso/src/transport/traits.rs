// nbt-perso/src/transport/traits.rs

use crate::Result;

/// Channel trait abstracts the byte-level request/response exchange with a
/// proximity device away from protocol and flow logic.
///
/// Implementations own timeouts and retry policy; this crate issues one
/// blocking round trip at a time and assumes exclusive ownership of the
/// channel for the duration of a personalization session. Tearing down the
/// channel aborts an in-flight exchange with a transport error.
pub trait Channel {
    /// Acquire the underlying connection.
    fn connect(&mut self) -> Result<()>;

    /// Release the underlying connection. Infallible so it can run
    /// unconditionally on both success and failure paths.
    fn disconnect(&mut self);

    /// Send one request and block until its response arrives.
    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>>;
}
