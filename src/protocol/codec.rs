//! Protocol codec
//!
//! The only two places where requests and replies exist as raw text.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! ["PULL","<filespec>","<schema>","<bucket>","<key>"]\n
//! ```
//! A JSON-style array of double-quoted strings, no spaces around the
//! commas, terminated by a single newline. Arguments are written
//! verbatim, so newlines and double quotes are refused up front.
//!
//! ### Reply
//! ```text
//! OK\n<payload>          success
//! ERROR\n<message>       failure
//! ```
//! The daemon closes the connection after the last byte; there is no
//! length prefix.

use std::ffi::OsStr;
use std::path::PathBuf;

use bytes::Bytes;

use crate::error::{PoolError, Result};
use super::reply::{ERROR_PREFIX, OK_PREFIX};
use super::{Reply, ReplyFailure, Request};

/// Bytes added around each argument: two quotes and a comma
const PER_ARG_OVERHEAD: usize = 3;

// =============================================================================
// Request Encoding
// =============================================================================

/// Check a single argument against the line framing rules
fn check_arg(arg: &str) -> Result<()> {
    if arg.contains('\n') {
        return Err(PoolError::InvalidArgument(
            "NEWLINE char not allowed".to_string(),
        ));
    }
    if arg.contains('"') {
        return Err(PoolError::InvalidArgument(
            "DQUOTE char not allowed".to_string(),
        ));
    }
    Ok(())
}

/// Encode an ordered argument list into one request line
///
/// Every argument is validated before anything is built, so a rejected
/// list produces no output at all.
pub fn encode_args<S: AsRef<str>>(args: &[S]) -> Result<String> {
    if args.is_empty() {
        return Err(PoolError::InvalidArgument(
            "request needs at least a command name".to_string(),
        ));
    }
    for arg in args {
        check_arg(arg.as_ref())?;
    }

    let len = 3 + args
        .iter()
        .map(|a| a.as_ref().len() + PER_ARG_OVERHEAD)
        .sum::<usize>();
    let mut line = String::with_capacity(len);
    line.push('[');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push('"');
        line.push_str(arg.as_ref());
        line.push('"');
    }
    line.push_str("]\n");

    Ok(line)
}

/// Encode a typed request into one request line
pub fn encode_request(request: &Request) -> Result<String> {
    encode_args(&request.args())
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Classify a raw reply
///
/// Total over all inputs: every byte sequence maps to exactly one
/// `Success` or `Failure`.
pub fn decode_reply(raw: Bytes) -> Reply {
    if raw.starts_with(OK_PREFIX) {
        return Reply::Success(raw.slice(OK_PREFIX.len()..));
    }

    if raw.starts_with(ERROR_PREFIX) {
        let message = String::from_utf8_lossy(&raw[ERROR_PREFIX.len()..]).into_owned();
        return Reply::Failure(ReplyFailure::Remote(message));
    }

    if raw.is_empty() {
        return Reply::Failure(ReplyFailure::Empty);
    }

    Reply::Failure(ReplyFailure::Malformed(
        String::from_utf8_lossy(&raw).into_owned(),
    ))
}

// =============================================================================
// Payload Interpretation
// =============================================================================

/// Local path named by raw payload bytes
///
/// Paths are handed back byte for byte; on unix no encoding is assumed.
#[cfg(unix)]
pub fn path_from_bytes(raw: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(raw))
}

#[cfg(not(unix))]
pub fn path_from_bytes(raw: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(raw).into_owned())
}

/// First line of a payload, without its newline
pub fn first_line(payload: &[u8]) -> &[u8] {
    match payload.iter().position(|&b| b == b'\n') {
        Some(end) => &payload[..end],
        None => payload,
    }
}

/// Paths of a PULL reply, one per line, up to the first empty line
pub fn parse_path_list(payload: &[u8]) -> Vec<PathBuf> {
    payload
        .split(|&b| b == b'\n')
        .take_while(|line| !line.is_empty())
        .map(path_from_bytes)
        .collect()
}

/// Keys of a GLOB reply, one per line, until end of payload
///
/// Lines are kept exactly as sent, blank ones included; only the empty
/// tail after the final newline is dropped.
pub fn parse_glob_listing(payload: &Bytes) -> Vec<Bytes> {
    if payload.is_empty() {
        return Vec::new();
    }

    let mut keys = Vec::new();
    let mut start = 0;
    for (i, &b) in payload.iter().enumerate() {
        if b == b'\n' {
            keys.push(payload.slice(start..i));
            start = i + 1;
        }
    }
    if start < payload.len() {
        keys.push(payload.slice(start..));
    }
    keys
}
