//! Protocol Module
//!
//! Defines the line protocol spoken with the s3pool daemon.
//!
//! ## Request
//! One line per connection:
//! ```text
//! ["<COMMAND>","<arg1>",...,"<argN>"]\n
//! ```
//!
//! ### Commands
//! - PULL    - filespec, schema, bucket, key [key...]
//! - PUSH    - bucket, key, local path
//! - REFRESH - bucket
//! - GLOB    - bucket, pattern
//!
//! ## Reply
//! Everything the daemon sends until it closes the connection:
//! ```text
//! OK\n<payload>
//! ERROR\n<message>
//! ```
//!
//! ### Payloads
//! - PULL    - one local path per key, newline separated; a blank line
//!             ends the list when several keys were asked for
//! - GLOB    - matching keys, one per line
//! - PUSH    - ignored
//! - REFRESH - ignored

mod request;
mod reply;
mod codec;

pub use request::{CommandType, Request};
pub use reply::{Reply, ReplyFailure, ERROR_PREFIX, OK_PREFIX};
pub use codec::{
    decode_reply, encode_args, encode_request, first_line, parse_glob_listing, parse_path_list,
    path_from_bytes,
};
