// nbt-perso/src/transport/mock.rs

use crate::transport::traits::Channel;
use crate::{Error, Result};

/// Mock channel for unit tests. It records sent requests and returns
/// queued responses in order.
#[derive(Debug, Default)]
pub struct MockChannel {
    /// Requests captured in transceive order.
    pub sent: Vec<Vec<u8>>,
    /// Responses handed out front-to-back.
    pub responses: Vec<Vec<u8>>,
    /// Number of successful connect calls.
    pub connects: usize,
    /// Number of disconnect calls.
    pub disconnects: usize,
    /// Testing hook: number of connect calls that should fail.
    pub connect_failures: usize,
}

impl MockChannel {
    /// Empty mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn push_response(&mut self, response: Vec<u8>) {
        self.responses.push(response);
    }

    /// Queue a bare status-word response.
    pub fn push_status(&mut self, sw: u16) {
        self.responses.push(sw.to_be_bytes().to_vec());
    }

    /// Queue `n` success responses.
    pub fn push_ok(&mut self, n: usize) {
        for _ in 0..n {
            self.push_status(crate::constants::SW_SUCCESS);
        }
    }

    /// Queue a response carrying data followed by the success status word.
    pub fn push_data(&mut self, data: &[u8]) {
        let mut response = data.to_vec();
        response.extend_from_slice(&crate::constants::SW_SUCCESS.to_be_bytes());
        self.responses.push(response);
    }

    /// Set how many subsequent connect calls should fail (for tests).
    pub fn set_connect_failures(&mut self, n: usize) {
        self.connect_failures = n;
    }
}

impl Channel for MockChannel {
    fn connect(&mut self) -> Result<()> {
        if self.connect_failures > 0 {
            self.connect_failures -= 1;
            return Err(Error::Transport("mock connect failure".to_string()));
        }
        self.connects += 1;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.disconnects += 1;
    }

    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(request.to_vec());
        if self.responses.is_empty() {
            Err(Error::Transport("no queued response".to_string()))
        } else {
            Ok(self.responses.remove(0))
        }
    }
}
