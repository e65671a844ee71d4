//! # s3pool client
//!
//! Client side of the s3pool object cache. A local daemon keeps objects
//! from a remote store on disk; this crate asks it to:
//! - PULL objects into the cache and hand back their local paths
//! - PUSH a local file up to the store
//! - REFRESH a bucket listing
//! - GLOB the keys of a bucket
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Client                                │
//! │          (pull / pull_multi / push / refresh / glob)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Request
//!          ┌────────────▼────────────┐
//!          │     encode_request      │  ["PULL","..."]\n
//!          └────────────┬────────────┘
//!                       │
//!          ┌────────────▼────────────┐        ┌──────────────┐
//!          │       Transport         │ ─TCP─▶ │    daemon    │
//!          │ (one connection / call) │ ◀───── │ (not here)   │
//!          └────────────┬────────────┘        └──────────────┘
//!                       │ raw bytes
//!          ┌────────────▼────────────┐
//!          │      decode_reply       │  OK\n... | ERROR\n...
//!          └─────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;
pub mod frontend;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PoolError, Result};
pub use config::ClientConfig;
pub use client::Client;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the s3pool client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
