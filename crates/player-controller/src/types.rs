use std::fmt;
use std::time::Duration;

use player_bridge::{InboundMessage, ShellSignal};
use player_common::WindowIdentity;
use player_config::{FailureConfig, PlayerConfig, PollConfig};

/// Where a controller is in its lifecycle. `Detached` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Attached,
    Detached,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Uninitialized => "uninitialized",
            Self::Attached => "attached",
            Self::Detached => "detached",
        };
        f.write_str(s)
    }
}

/// What started the close sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The user closed the window from the UI.
    User,
    /// The backend sent `close` on the window channel.
    Backend,
    /// The shell reported a close request.
    Shell,
    /// Too many `poll` sends failed in a row.
    PollFailures,
}

impl fmt::Display for CloseTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::Backend => "backend",
            Self::Shell => "shell",
            Self::PollFailures => "poll-failures",
        };
        f.write_str(s)
    }
}

/// Playback controls wired to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Play,
    Pause,
}

/// Everything a controller reacts to, in mailbox order.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    User(UserAction),
    CloseRequested(CloseTrigger),
    /// Raw message from the backend channel.
    Inbound(InboundMessage),
    Shell(ShellSignal),
    PollTick,
}

/// Controller settings derived from [`PlayerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub poll_interval: Duration,
    pub failures: FailureConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_interval: PollConfig::default().interval(),
            failures: FailureConfig::default(),
        }
    }
}

impl From<&PlayerConfig> for ControllerConfig {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            poll_interval: config.poll.interval(),
            failures: config.failures.clone(),
        }
    }
}

/// Summary returned when a controller's run loop ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerReport {
    pub identity: WindowIdentity,
    pub state: LifecycleState,
    /// `None` if the window never went through the close sequence.
    pub trigger: Option<CloseTrigger>,
    /// Envelopes the backend accepted.
    pub sent: u64,
    /// Envelopes the backend rejected.
    pub failed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_player_config() {
        let mut player = PlayerConfig::default();
        player.poll.interval_ms = 250;
        player.failures.max_consecutive_poll_failures = 4;

        let config = ControllerConfig::from(&player);
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.failures.max_consecutive_poll_failures, 4);
    }

    #[test]
    fn default_config_polls_every_500ms() {
        assert_eq!(ControllerConfig::default().poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn display_names() {
        assert_eq!(LifecycleState::Attached.to_string(), "attached");
        assert_eq!(CloseTrigger::PollFailures.to_string(), "poll-failures");
    }
}
