//! # Protocol Error Types
//!
//! Everything that can be wrong with bytes on the wire.

use thiserror::Error;

use crate::constants::PAYLOAD_LEN;

/// Errors raised while decoding or encoding protocol messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Fewer than [`REQUEST_LEN`](crate::constants::REQUEST_LEN) bytes were available for a request.
    #[error("truncated request: got {received} of 16 bytes")]
    TruncatedRequest {
        /// Bytes actually received.
        received: usize,
    },

    /// A voxel id outside the closed material set.
    #[error("unknown material id: {0}")]
    UnknownMaterial(u16),

    /// A voxel payload with the wrong size.
    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    PayloadLength {
        /// Required size ([`PAYLOAD_LEN`] for a chunk).
        expected: usize,
        /// Size received.
        actual: usize,
    },

    /// The length prefix disagrees with the bytes that follow it.
    #[error("length prefix declares {declared} bytes but {actual} follow")]
    LengthPrefixMismatch {
        /// Value of the prefix.
        declared: usize,
        /// Bytes actually present after the prefix.
        actual: usize,
    },

    /// A payload too large for a `u32` length prefix.
    #[error("payload of {0} bytes does not fit a u32 length prefix")]
    PayloadTooLarge(usize),
}

impl ProtocolError {
    /// Payload length error for a chunk-sized payload.
    #[must_use]
    pub const fn chunk_payload(actual: usize) -> Self {
        Self::PayloadLength {
            expected: PAYLOAD_LEN,
            actual,
        }
    }
}

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
