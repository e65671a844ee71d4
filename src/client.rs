//! Client Module
//!
//! The command API for talking to the s3pool daemon.
//!
//! ## Responsibilities
//! - Build the argument list for each command
//! - Drive encode → transport → decode
//! - Turn the payload into what the caller wants (a path, a list of keys)
//!
//! Every call is one blocking connection attempt. Nothing is retried and
//! nothing is shared between calls, so a `Client` can be used from several
//! threads at once.

use std::path::PathBuf;

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::error::{PoolError, Result};
use crate::network::Transport;
use crate::protocol::{
    decode_reply, encode_request, first_line, parse_glob_listing, parse_path_list,
    path_from_bytes, Request,
};

/// Client for the s3pool daemon
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client with the given config
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Client for the daemon on the loopback interface at `port`
    pub fn with_port(port: u16) -> Result<Self> {
        Self::new(ClientConfig::with_port(port))
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Run a request and return the success payload
    ///
    /// The request is encoded before connecting, so argument errors never
    /// touch the network.
    pub fn execute(&self, request: &Request) -> Result<Bytes> {
        let line = encode_request(request)?;
        tracing::debug!(
            "{} request to {}",
            request.command_type().as_str(),
            self.config().addr()
        );

        let raw = self.transport.send_and_receive(&line)?;
        let reply = decode_reply(raw);
        if !reply.is_success() {
            tracing::debug!("{:?} failed: {:?}", request.command_type(), reply);
        }
        reply.into_result()
    }

    /// Pull one object and return its local path
    ///
    /// Paths come back byte for byte as the daemon sent them; they need not
    /// be UTF-8.
    pub fn pull(&self, filespec: &str, schema: &str, bucket: &str, key: &str) -> Result<PathBuf> {
        let payload = self.execute(&Request::Pull {
            filespec: filespec.to_string(),
            schema: schema.to_string(),
            bucket: bucket.to_string(),
            keys: vec![key.to_string()],
        })?;

        Ok(path_from_bytes(first_line(&payload)))
    }

    /// Pull several objects and return their local paths, in key order
    pub fn pull_multi<S: AsRef<str>>(
        &self,
        filespec: &str,
        schema: &str,
        bucket: &str,
        keys: &[S],
    ) -> Result<Vec<PathBuf>> {
        if keys.is_empty() {
            return Err(PoolError::InvalidArgument(
                "pull_multi: need at least one key".to_string(),
            ));
        }

        let payload = self.execute(&Request::Pull {
            filespec: filespec.to_string(),
            schema: schema.to_string(),
            bucket: bucket.to_string(),
            keys: keys.iter().map(|k| k.as_ref().to_string()).collect(),
        })?;

        Ok(parse_path_list(&payload))
    }

    /// Upload a local file as `bucket/key`
    pub fn push(&self, bucket: &str, key: &str, local_path: &str) -> Result<()> {
        self.execute(&Request::Push {
            bucket: bucket.to_string(),
            key: key.to_string(),
            local_path: local_path.to_string(),
        })?;
        Ok(())
    }

    /// Ask the daemon to re-list a bucket
    pub fn refresh(&self, bucket: &str) -> Result<()> {
        self.execute(&Request::Refresh {
            bucket: bucket.to_string(),
        })?;
        Ok(())
    }

    /// List the keys of `bucket` matching `pattern`
    ///
    /// Keys are raw slices of the reply, one per line, exactly as sent.
    pub fn glob(&self, bucket: &str, pattern: &str) -> Result<Vec<Bytes>> {
        let payload = self.execute(&Request::Glob {
            bucket: bucket.to_string(),
            pattern: pattern.to_string(),
        })?;

        Ok(parse_glob_listing(&payload))
    }
}
