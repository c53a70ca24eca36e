use player_bridge::OutboundEvent;
use tracing::{debug, info, warn};

use super::WindowController;
use crate::types::{CloseTrigger, LifecycleState};

impl WindowController {
    /// Run the close sequence: send `closed`, release every resource, then
    /// ask the shell to close the window.
    ///
    /// Only the first call on an attached controller does anything.
    pub async fn close(&mut self, trigger: CloseTrigger) {
        if self.state != LifecycleState::Attached {
            debug!(window = %self.identity, state = %self.state, %trigger, "close ignored");
            return;
        }
        info!(window = %self.identity, %trigger, "closing player window");
        self.trigger = Some(trigger);

        self.emit(OutboundEvent::Closed).await;
        self.detach();

        if let Err(e) = self.window.close().await {
            warn!(window = %self.identity, error = %e, "shell refused to close window");
        }
    }

    /// Cancel the poll timer and every subscription (newest first).
    ///
    /// Idempotent, and fine to call on a controller that never attached.
    /// Does not send `closed` or close the window.
    pub fn detach(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        let released = self.subscriptions.len();
        while let Some(mut subscription) = self.subscriptions.pop() {
            subscription.cancel();
        }
        if self.state != LifecycleState::Detached {
            self.state = LifecycleState::Detached;
            debug!(window = %self.identity, released, "player window detached");
        }
    }
}
