//! Transport
//!
//! Connect, send one request line, return the raw reply bytes.

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::error::Result;
use super::Connection;

/// Opens a fresh connection for every request
#[derive(Debug, Clone)]
pub struct Transport {
    config: ClientConfig,
}

impl Transport {
    /// Create a transport, validating the config first
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one request/response exchange
    ///
    /// Nothing is retried beyond transient would-block conditions.
    pub fn send_and_receive(&self, request_line: &str) -> Result<Bytes> {
        let connection = Connection::open(&self.config)?;
        connection.exchange(request_line.as_bytes())
    }
}

/// One-shot exchange with the daemon at `host:port`
pub fn send_and_receive(host: &str, port: u16, request_line: &str) -> Result<Bytes> {
    let config = ClientConfig::builder().host(host).port(port).build();
    Transport::new(config)?.send_and_receive(request_line)
}
