use std::ops::ControlFlow;

use player_bridge::{InboundEvent, OutboundEvent};
use tracing::{debug, error, trace, warn};

use super::WindowController;
use crate::types::{CloseTrigger, ControllerEvent, LifecycleState, UserAction};

impl WindowController {
    /// Handle one mailbox event. Breaks once the controller is detached.
    ///
    /// Events are only acted on while attached; anything arriving before
    /// `attach` or after the close sequence is dropped.
    pub async fn dispatch(&mut self, event: ControllerEvent) -> ControlFlow<()> {
        if self.state != LifecycleState::Attached {
            trace!(window = %self.identity, state = %self.state, ?event, "event dropped");
            return self.flow();
        }

        match event {
            ControllerEvent::User(UserAction::Play) => {
                self.emit(OutboundEvent::Play).await;
            }
            ControllerEvent::User(UserAction::Pause) => {
                self.emit(OutboundEvent::Pause).await;
            }
            ControllerEvent::CloseRequested(trigger) => self.close(trigger).await,
            ControllerEvent::Inbound(message) => match InboundEvent::from(&message) {
                InboundEvent::Close => self.close(CloseTrigger::Backend).await,
                InboundEvent::Unknown(tag) => {
                    debug!(window = %self.identity, event = %tag, "ignoring unrecognized backend event");
                }
            },
            ControllerEvent::Shell(signal) => match signal.forwarded() {
                Some(outbound) => {
                    self.emit(outbound).await;
                }
                None => self.close(CloseTrigger::Shell).await,
            },
            ControllerEvent::PollTick => self.poll().await,
        }

        self.flow()
    }

    fn flow(&self) -> ControlFlow<()> {
        if self.state == LifecycleState::Detached {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    async fn poll(&mut self) {
        if self.emit(OutboundEvent::Poll).await {
            self.poll_failures = 0;
            return;
        }
        self.poll_failures += 1;
        if self.config.failures.should_escalate(self.poll_failures) {
            error!(
                window = %self.identity,
                failures = self.poll_failures,
                "backend unreachable, closing player window"
            );
            self.close(CloseTrigger::PollFailures).await;
        }
    }

    /// Send one outbound event. Returns whether the backend accepted it.
    pub(super) async fn emit(&mut self, event: OutboundEvent) -> bool {
        let name = event.name();
        let envelope = event.into_envelope(&self.identity);
        match self.backend.send(envelope).await {
            Ok(()) => {
                self.sent += 1;
                debug!(window = %self.identity, event = name, "sent player event");
                true
            }
            Err(e) => {
                self.failed += 1;
                warn!(window = %self.identity, event = name, error = %e, "failed to send player event");
                false
            }
        }
    }
}
