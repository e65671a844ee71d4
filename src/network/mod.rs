//! Network Module
//!
//! TCP client handling.
//!
//! ## Architecture
//! - One connection per request, never pooled
//! - Blocking I/O on the calling thread
//! - The daemon closing the connection marks the end of the reply

mod connection;
mod transport;

pub use connection::{next_buffer_len, Connection};
pub use transport::{send_and_receive, Transport};
