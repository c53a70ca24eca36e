use player_bridge::{InboundHandler, OutboundEvent, ShellHandler, ShellSignalKind};
use player_common::{PlayerError, Result};
use tracing::{info, warn};

use super::WindowController;
use crate::timer::PollTimer;
use crate::types::{ControllerEvent, LifecycleState};

impl WindowController {
    /// Register every listener, start polling and announce `ready`.
    ///
    /// Registrations run concurrently and are all acknowledged before this
    /// returns. A failed registration is logged and skipped unless
    /// `strict_registration` is set, in which case everything registered so
    /// far is released and the controller ends up `Detached`.
    ///
    /// A zero poll interval is rejected before anything is registered.
    pub async fn attach(&mut self) -> Result<()> {
        if self.state != LifecycleState::Uninitialized {
            return Err(PlayerError::InvalidState(format!(
                "cannot attach {}: controller is {}",
                self.identity, self.state
            )));
        }
        if self.config.poll_interval.is_zero() {
            return Err(PlayerError::InvalidState(format!(
                "cannot attach {}: poll interval must be non-zero",
                self.identity
            )));
        }

        let (backend, resized, moved, close_requested) = tokio::join!(
            self.backend
                .subscribe(self.identity.channel_name(), self.inbound_handler()),
            self.window
                .listen(ShellSignalKind::Resized, self.shell_handler()),
            self.window.listen(ShellSignalKind::Moved, self.shell_handler()),
            self.window
                .listen(ShellSignalKind::CloseRequested, self.shell_handler()),
        );

        let results = [
            (self.identity.channel_name().to_string(), backend),
            (ShellSignalKind::Resized.event_name().to_string(), resized),
            (ShellSignalKind::Moved.event_name().to_string(), moved),
            (ShellSignalKind::CloseRequested.event_name().to_string(), close_requested),
        ];

        let mut failures = Vec::new();
        for (listener, result) in results {
            match result {
                Ok(subscription) => self.subscriptions.push(subscription),
                Err(e) => {
                    warn!(window = %self.identity, listener = %listener, error = %e, "listener registration failed");
                    failures.push(format!("{listener}: {e}"));
                }
            }
        }

        if !failures.is_empty() && self.config.failures.strict_registration {
            self.detach();
            return Err(PlayerError::Registration(failures.join("; ")));
        }

        self.state = LifecycleState::Attached;
        self.timer = Some(PollTimer::start(self.config.poll_interval, self.mailbox.clone()));
        info!(
            window = %self.identity,
            listeners = self.subscriptions.len(),
            poll_ms = self.config.poll_interval.as_millis() as u64,
            "player window attached"
        );

        self.emit(OutboundEvent::Ready).await;
        Ok(())
    }

    fn inbound_handler(&self) -> InboundHandler {
        let mailbox = self.mailbox.clone();
        Box::new(move |message| {
            let _ = mailbox.send(ControllerEvent::Inbound(message));
        })
    }

    fn shell_handler(&self) -> ShellHandler {
        let mailbox = self.mailbox.clone();
        Box::new(move |signal| {
            let _ = mailbox.send(ControllerEvent::Shell(signal));
        })
    }
}
