//! Configuration for the s3pool client
//!
//! Centralized configuration with sensible defaults.

use crate::error::{PoolError, Result};

/// Default daemon host; the daemon only listens on loopback
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default starting size of the reply buffer (bytes)
pub const DEFAULT_REPLY_CAPACITY: usize = 1024;

/// Connection settings used for every request
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Daemon host
    pub host: String,

    /// Daemon TCP port (0 means unset)
    pub port: u16,

    /// Disable Nagle's algorithm on each connection
    pub nodelay: bool,

    // -------------------------------------------------------------------------
    // Buffer Configuration
    // -------------------------------------------------------------------------
    /// Initial size of the reply buffer. It grows by half again whenever
    /// it fills up, so this only matters for small replies.
    pub initial_reply_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 0,
            nodelay: true,
            initial_reply_capacity: DEFAULT_REPLY_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Default config pointed at the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Check the settings before any connection is attempted
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(PoolError::Config("port must be in 1..=65535".to_string()));
        }
        if self.host.is_empty() {
            return Err(PoolError::Config("host must not be empty".to_string()));
        }
        if self.initial_reply_capacity == 0 {
            return Err(PoolError::Config(
                "initial reply capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` string, used for connecting and in diagnostics
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the daemon host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the daemon port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable or disable TCP_NODELAY
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    /// Set the initial reply buffer size (in bytes)
    pub fn initial_reply_capacity(mut self, size: usize) -> Self {
        self.config.initial_reply_capacity = size;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
