//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config can be deserialized from a
//! file, but the usual path is constructing one directly in code.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the ledger client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the ledger REST service (e.g., "http://127.0.0.1:8080").
    pub node_url: String,

    /// Base URL of the faucet service, if one is available.
    pub faucet_url: Option<String>,

    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,

    /// Delay between confirmation polls in seconds.
    pub poll_interval_secs: u64,

    /// Number of confirmation polls before giving up.
    pub max_poll_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node_url: String::new(),
            faucet_url: None,
            request_timeout_secs: 10,
            poll_interval_secs: 1,
            max_poll_attempts: 10,
        }
    }
}

impl ClientConfig {
    /// Create a config pointed at a node URL, everything else defaulted.
    pub fn new(node_url: impl Into<String>) -> Self {
        Self {
            node_url: node_url.into(),
            ..Self::default()
        }
    }

    /// Set the faucet URL.
    pub fn with_faucet_url(mut self, faucet_url: impl Into<String>) -> Self {
        self.faucet_url = Some(faucet_url.into());
        self
    }

    /// Delay between confirmation polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Per-request HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
