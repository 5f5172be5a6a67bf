//! Configuration structures.
//!
//! Configuration is loaded from environment variables and config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Global adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Power-state listener configuration.
    #[serde(default)]
    pub listener: ListenerConfig,
}

/// Power-state change listener configuration.
///
/// Both values are handed to the hypervisor-management layer's detection
/// loop; this crate does not interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// The timeframe to be checked for instance power state changes.
    #[serde(with = "humantime_serde")]
    pub check_timeframe: Duration,

    /// Instance power state change event polling frequency.
    #[serde(with = "humantime_serde")]
    pub polling_interval: Duration,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            check_timeframe: Duration::from_secs(60),
            polling_interval: Duration::from_secs(2),
        }
    }
}
