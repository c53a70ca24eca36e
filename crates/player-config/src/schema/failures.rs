//! What a window does when the backend channel misbehaves.

use serde::{Deserialize, Serialize};

/// Failure handling policy.
///
/// The defaults log and carry on: a failed registration leaves that one
/// signal path missing and a failed send is simply dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FailureConfig {
    /// Close the window after this many `poll` sends fail in a row.
    /// `0` disables escalation.
    pub max_consecutive_poll_failures: u32,
    /// Fail `attach` when any listener cannot be registered.
    pub strict_registration: bool,
}

impl FailureConfig {
    /// Whether `failures` consecutive poll-send failures should close the window.
    pub fn should_escalate(&self, failures: u32) -> bool {
        self.max_consecutive_poll_failures > 0 && failures >= self.max_consecutive_poll_failures
    }
}
