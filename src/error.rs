//! Error types for the s3pool client
//!
//! Provides a unified error type for all operations.

use std::io;

use thiserror::Error;

/// Result type alias using PoolError
pub type Result<T> = std::result::Result<T, PoolError>;

/// Unified error type for s3pool client operations
#[derive(Debug, Error)]
pub enum PoolError {
    // -------------------------------------------------------------------------
    // Argument Errors (detected before any I/O)
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("s3pool connect: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("s3pool write: {0}")]
    Write(#[source] io::Error),

    #[error("s3pool read: {0}")]
    Read(#[source] io::Error),

    // -------------------------------------------------------------------------
    // Reply Errors
    // -------------------------------------------------------------------------
    #[error("empty reply from daemon")]
    EmptyReply,

    #[error("bad message from daemon: {0}")]
    Protocol(String),

    /// The daemon answered `ERROR`; the message is passed through untouched.
    #[error("{0}")]
    Remote(String),

    // -------------------------------------------------------------------------
    // Local Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PoolError {
    /// True for connect, write and read failures
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PoolError::Connect { .. } | PoolError::Write(_) | PoolError::Read(_)
        )
    }
}
