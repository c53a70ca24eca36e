//! Capabilities a player window consumes from its host.

use std::fmt;

use async_trait::async_trait;
use player_common::BridgeError;

use crate::events::{ShellSignal, ShellSignalKind};
use crate::protocol::{InboundMessage, PlayerEventEnvelope};

/// Callback invoked for every backend message on a subscribed channel.
pub type InboundHandler = Box<dyn Fn(InboundMessage) + Send + Sync>;

/// Callback invoked for every shell signal of a subscribed kind.
pub type ShellHandler = Box<dyn Fn(ShellSignal) + Send + Sync>;

/// Named-channel messaging with the backend process.
#[async_trait]
pub trait BackendChannel: Send + Sync {
    /// Deliver an envelope through the `player_event` command.
    /// Fire-and-forget: an error is only reported so it can be logged.
    async fn send(&self, envelope: PlayerEventEnvelope) -> Result<(), BridgeError>;

    /// Listen for backend messages on `channel`. Resolves once the
    /// registration has been acknowledged.
    async fn subscribe(
        &self,
        channel: &str,
        handler: InboundHandler,
    ) -> Result<Subscription, BridgeError>;
}

/// The hosting shell window.
#[async_trait]
pub trait ShellWindow: Send + Sync {
    /// Window label assigned by the shell.
    fn label(&self) -> &str;

    /// Listen for one kind of window-manager signal.
    async fn listen(
        &self,
        kind: ShellSignalKind,
        handler: ShellHandler,
    ) -> Result<Subscription, BridgeError>;

    /// Ask the shell to close the window.
    async fn close(&self) -> Result<(), BridgeError>;
}

/// Cancellation token for a registered listener.
///
/// Canceling is synchronous: once `cancel` returns the handler is never
/// invoked again. Canceling twice is a no-op, and dropping an active
/// subscription cancels it.
pub struct Subscription {
    label: String,
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(label: impl Into<String>, cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            cancel: Some(Box::new(cancel)),
        }
    }

    /// What this subscription listens to (channel or shell event name).
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(label: &str) -> (Subscription, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = Subscription::new(label, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (sub, calls)
    }

    #[test]
    fn cancel_runs_once() {
        let (mut sub, calls) = counting("player-1");
        assert!(sub.is_active());
        sub.cancel();
        sub.cancel();
        assert!(!sub.is_active());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_cancels_active_subscription() {
        let (sub, calls) = counting("tauri://resize");
        drop(sub);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_after_cancel_does_not_cancel_again() {
        let (mut sub, calls) = counting("tauri://move");
        sub.cancel();
        drop(sub);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_shows_label_and_state() {
        let (sub, _) = counting("player-1");
        let text = format!("{sub:?}");
        assert!(text.contains("player-1"));
        assert!(text.contains("active: true"));
    }
}
