//! The window controller actor.
//!
//! `WindowController` is split by lifecycle phase:
//! - `attach`: listener registration, timer start, `ready`
//! - `dispatch`: mailbox handling while attached
//! - `teardown`: the close sequence and resource release

use std::sync::Arc;

use player_bridge::{BackendChannel, ShellWindow, Subscription};
use player_common::WindowIdentity;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::handle::ControllerHandle;
use crate::timer::PollTimer;
use crate::types::{CloseTrigger, ControllerConfig, ControllerEvent, ControllerReport, LifecycleState};

mod attach;
mod dispatch;
mod teardown;


/// Lifecycle owner for one player window.
pub struct WindowController {
    identity: WindowIdentity,
    window: Arc<dyn ShellWindow>,
    backend: Arc<dyn BackendChannel>,
    config: ControllerConfig,
    state: LifecycleState,
    /// In registration order; drained in reverse.
    subscriptions: Vec<Subscription>,
    timer: Option<PollTimer>,
    mailbox: UnboundedSender<ControllerEvent>,
    trigger: Option<CloseTrigger>,
    poll_failures: u32,
    sent: u64,
    failed: u64,
}

impl WindowController {
    /// Create an unattached controller and the mailbox it drains.
    pub fn new(
        identity: WindowIdentity,
        window: Arc<dyn ShellWindow>,
        backend: Arc<dyn BackendChannel>,
        config: ControllerConfig,
    ) -> (Self, UnboundedReceiver<ControllerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            identity,
            window,
            backend,
            config,
            state: LifecycleState::Uninitialized,
            subscriptions: Vec::new(),
            timer: None,
            mailbox: tx,
            trigger: None,
            poll_failures: 0,
            sent: 0,
            failed: 0,
        };
        (controller, rx)
    }

    /// Create a controller and run it on its own task.
    pub fn spawn(
        identity: WindowIdentity,
        window: Arc<dyn ShellWindow>,
        backend: Arc<dyn BackendChannel>,
        config: ControllerConfig,
    ) -> (ControllerHandle, JoinHandle<ControllerReport>) {
        let (controller, mailbox) = Self::new(identity, window, backend, config);
        let handle = controller.handle();
        (handle, tokio::spawn(controller.run(mailbox)))
    }

    /// Attach (if not done yet) and process the mailbox until detached.
    pub async fn run(mut self, mut mailbox: UnboundedReceiver<ControllerEvent>) -> ControllerReport {
        if self.state == LifecycleState::Uninitialized {
            if let Err(e) = self.attach().await {
                error!(window = %self.identity, error = %e, "player window failed to attach");
                return self.report();
            }
        }

        while self.state == LifecycleState::Attached {
            let Some(event) = mailbox.recv().await else {
                break;
            };
            if self.dispatch(event).await.is_break() {
                break;
            }
        }

        self.detach();
        info!(
            window = %self.identity,
            sent = self.sent,
            failed = self.failed,
            "player window controller stopped"
        );
        self.report()
    }

    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle::new(self.identity.clone(), self.mailbox.clone())
    }

    pub fn identity(&self) -> &WindowIdentity {
        &self.identity
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_polling(&self) -> bool {
        self.timer.as_ref().is_some_and(PollTimer::is_running)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn report(&self) -> ControllerReport {
        ControllerReport {
            identity: self.identity.clone(),
            state: self.state,
            trigger: self.trigger,
            sent: self.sent,
            failed: self.failed,
        }
    }
}

impl Drop for WindowController {
    fn drop(&mut self) {
        self.detach();
    }
}
