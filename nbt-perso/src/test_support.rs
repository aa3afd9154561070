// nbt-perso/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockChannel setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::transport::{self, MockChannel};

/// Build a MockChannel pre-seeded with `n` bare success status words.
#[doc(hidden)]
pub fn mock_with_ok(n: usize) -> MockChannel {
    let mut mock = MockChannel::new();
    mock.push_ok(n);
    mock
}

/// Build a MockChannel pre-seeded with the given raw responses and return
/// it boxed as a Channel trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn transport::Channel> {
    let mut mock = MockChannel::new();
    for response in responses {
        mock.push_response(response);
    }
    Box::new(mock)
}

/// Append a success status word to arbitrary response data, yielding the
/// raw bytes a tag would answer with.
#[doc(hidden)]
pub fn ok_response(data: &[u8]) -> Vec<u8> {
    let mut response = data.to_vec();
    response.extend_from_slice(&crate::constants::SW_SUCCESS.to_be_bytes());
    response
}
