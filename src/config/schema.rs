//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Durations are carried as plain numbers (seconds) and converted through
//! the accessor methods once the config has been validated.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ledger network selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Production API endpoint for this network.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.gamechain.io",
            Network::Testnet => "https://testnet-api.gamechain.io",
        }
    }

    /// Address prefix for wallets on this network.
    pub fn address_prefix(&self) -> &'static str {
        match self {
            Network::Mainnet => "GC",
            Network::Testnet => "gc",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Root SDK configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Ledger API endpoint. An empty string selects the network default.
    pub endpoint_url: String,

    /// Network selector.
    pub network: Network,

    /// Broadcast attempts before giving up (>= 1).
    pub max_attempts: u32,

    /// Fixed delay between broadcast attempts, in seconds.
    pub retry_delay_secs: f64,

    /// Delay between event poll cycles, in seconds.
    pub event_poll_interval_secs: f64,

    /// Per-request timeout for broadcasts and event fetches, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            network: Network::Mainnet,
            max_attempts: 3,
            retry_delay_secs: 3.0,
            event_poll_interval_secs: 10.0,
            request_timeout_secs: 10,
        }
    }
}

impl SdkConfig {
    /// The configured endpoint, falling back to the network default when unset.
    pub fn effective_endpoint(&self) -> &str {
        if self.endpoint_url.is_empty() {
            self.network.default_endpoint()
        } else {
            &self.endpoint_url
        }
    }

    /// Inter-attempt broadcast delay.
    ///
    /// Call only on a validated config: negative or non-finite values panic.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs_f64(self.retry_delay_secs)
    }

    /// Inter-cycle event poll delay.
    ///
    /// Call only on a validated config: negative or non-finite values panic.
    pub fn event_poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.event_poll_interval_secs)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
