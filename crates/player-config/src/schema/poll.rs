//! Health poll cadence.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default poll period, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Periodic liveness poll sent by every attached window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PollConfig {
    /// Milliseconds between `poll` events (valid range: 50-60000).
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
