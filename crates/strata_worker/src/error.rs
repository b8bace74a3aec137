//! # Worker Error Types
//!
//! Everything that can fail inside one worker iteration.

use thiserror::Error;

use strata_shared::ProtocolError;

/// Errors that can occur while serving a request.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Reading the request or writing the response failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes did not match the wire contract.
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolError),

    /// The configuration file could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for worker operations.
pub type WorkerResult<T> = Result<T, WorkerError>;
