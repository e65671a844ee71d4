//! Reply definitions
//!
//! Represents what the daemon sent back.

use bytes::Bytes;

use crate::error::{PoolError, Result};

/// Prefix of a successful reply
pub const OK_PREFIX: &[u8] = b"OK\n";

/// Prefix of a failed reply
pub const ERROR_PREFIX: &[u8] = b"ERROR\n";

/// A decoded reply: exactly one of success or failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Bytes following `OK\n`
    Success(Bytes),

    /// Why the request failed
    Failure(ReplyFailure),
}

/// The ways a reply can fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyFailure {
    /// Peer closed without sending anything
    Empty,

    /// Reply matched neither prefix; holds the raw reply text
    Malformed(String),

    /// Daemon answered `ERROR\n<message>`
    Remote(String),
}

impl ReplyFailure {
    /// Human-readable message for this failure
    pub fn message(&self) -> String {
        match self {
            ReplyFailure::Empty => "empty reply from daemon".to_string(),
            ReplyFailure::Malformed(raw) => format!("bad message from daemon: {}", raw),
            ReplyFailure::Remote(message) => message.clone(),
        }
    }
}

impl Reply {
    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(_))
    }

    /// Convert into a typed result, keeping the payload on success
    pub fn into_result(self) -> Result<Bytes> {
        match self {
            Reply::Success(payload) => Ok(payload),
            Reply::Failure(ReplyFailure::Empty) => Err(PoolError::EmptyReply),
            Reply::Failure(ReplyFailure::Malformed(raw)) => Err(PoolError::Protocol(raw)),
            Reply::Failure(ReplyFailure::Remote(message)) => Err(PoolError::Remote(message)),
        }
    }
}
