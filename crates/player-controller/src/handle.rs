use player_common::WindowIdentity;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::types::{CloseTrigger, ControllerEvent, UserAction};

/// Cheap, cloneable UI-side handle to a running controller.
///
/// Every method only enqueues; the controller task does the work. Each
/// returns `false` once the controller has stopped.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    identity: WindowIdentity,
    tx: UnboundedSender<ControllerEvent>,
}

impl ControllerHandle {
    pub(crate) fn new(identity: WindowIdentity, tx: UnboundedSender<ControllerEvent>) -> Self {
        Self { identity, tx }
    }

    pub fn identity(&self) -> &WindowIdentity {
        &self.identity
    }

    pub fn play(&self) -> bool {
        self.post(ControllerEvent::User(UserAction::Play))
    }

    pub fn pause(&self) -> bool {
        self.post(ControllerEvent::User(UserAction::Pause))
    }

    /// User close request.
    pub fn close(&self) -> bool {
        self.post(ControllerEvent::CloseRequested(CloseTrigger::User))
    }

    /// True once the controller task has exited.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn post(&self, event: ControllerEvent) -> bool {
        let delivered = self.tx.send(event).is_ok();
        if !delivered {
            debug!(window = %self.identity, "controller stopped, dropping UI action");
        }
        delivered
    }
}
