//! Connection Handler
//!
//! One short-lived connection to the daemon: write the request, read
//! until the daemon hangs up, close.

use std::io::{self, Read, Write};
use std::net::TcpStream;

use bytes::{Bytes, BytesMut};

use crate::config::{ClientConfig, DEFAULT_REPLY_CAPACITY};
use crate::error::{PoolError, Result};

/// Grow a full reply buffer by half again (never by less than one byte)
pub fn next_buffer_len(current: usize) -> usize {
    if current == 0 {
        return DEFAULT_REPLY_CAPACITY;
    }
    current + (current / 2).max(1)
}

/// Conditions that mean "try the same call again"
fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

/// A single request/response connection
///
/// The stream is owned exclusively; [`Connection::receive`] and
/// [`Connection::exchange`] consume the connection, so the stream is
/// dropped (closed) before they return on every path.
pub struct Connection<S = TcpStream> {
    stream: S,

    /// Peer address for logging
    peer_addr: String,

    /// Starting size of the reply buffer
    initial_capacity: usize,
}

impl Connection<TcpStream> {
    /// Connect to the daemon described by `config`
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let addr = config.addr();
        let stream = TcpStream::connect((config.host.as_str(), config.port)).map_err(|source| {
            PoolError::Connect {
                addr: addr.clone(),
                source,
            }
        })?;

        if config.nodelay {
            stream.set_nodelay(true).map_err(|source| PoolError::Connect {
                addr: addr.clone(),
                source,
            })?;
        }

        tracing::debug!("Connected to s3pool at {}", addr);
        Ok(Self::with_stream(stream, addr, config.initial_reply_capacity))
    }
}

impl<S: Read + Write> Connection<S> {
    /// Wrap an already established stream
    pub fn with_stream(stream: S, peer_addr: impl Into<String>, initial_capacity: usize) -> Self {
        Self {
            stream,
            peer_addr: peer_addr.into(),
            initial_capacity,
        }
    }

    /// Write the whole request, resuming after short writes
    pub fn send(&mut self, request: &[u8]) -> Result<()> {
        let mut written = 0;
        while written < request.len() {
            match self.stream.write(&request[written..]) {
                Ok(0) => {
                    return Err(PoolError::Write(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "connection accepted no bytes",
                    )));
                }
                Ok(n) => written += n,
                Err(ref e) if is_transient(e) => continue,
                Err(e) => return Err(PoolError::Write(e)),
            }
        }

        loop {
            match self.stream.flush() {
                Ok(()) => break,
                Err(ref e) if is_transient(e) => continue,
                Err(e) => return Err(PoolError::Write(e)),
            }
        }

        tracing::trace!("Sent {} bytes to {}", written, self.peer_addr);
        Ok(())
    }

    /// Read until the peer closes the connection, then close our side
    pub fn receive(mut self) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(self.initial_capacity);
        let mut top = 0;

        loop {
            if top == buf.len() {
                buf.resize(next_buffer_len(buf.len()), 0);
            }

            match self.stream.read(&mut buf[top..]) {
                Ok(0) => break,
                Ok(n) => top += n,
                Err(ref e) if is_transient(e) => continue,
                Err(e) => return Err(PoolError::Read(e)),
            }
        }
        buf.truncate(top);

        tracing::trace!("Received {} bytes from {}", top, self.peer_addr);

        if top == 0 {
            return Err(PoolError::EmptyReply);
        }
        Ok(buf.freeze())
    }

    /// Send the request and collect the full reply
    pub fn exchange(mut self, request: &[u8]) -> Result<Bytes> {
        self.send(request)?;
        self.receive()
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
