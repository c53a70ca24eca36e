use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::types::ControllerEvent;

/// Repeating timer that posts [`ControllerEvent::PollTick`] into a
/// controller mailbox. The first tick fires one period after start.
#[derive(Debug)]
pub struct PollTimer {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl PollTimer {
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration, mailbox: UnboundedSender<ControllerEvent>) -> Self {
        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if mailbox.send(ControllerEvent::PollTick).is_err() {
                    break;
                }
            }
        });
        Self {
            period,
            task: Some(task),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop ticking. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
