//! In-memory backend and shell window.
//!
//! Both sides write into a shared [`Journal`] so the exact order of sends,
//! listener removals and window closes can be inspected afterwards. Used
//! by the harness binary and by tests; also handy for embedding a player
//! window without a real desktop shell.

mod backend;
mod shell;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use player_common::WindowIdentity;

use crate::protocol::PlayerEventEnvelope;

pub use backend::LocalBackend;
pub use shell::LocalShellWindow;

/// One observable side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// An envelope reached the backend.
    Sent(PlayerEventEnvelope),
    /// A listener was removed. Carries the channel or shell event name.
    Unlistened(String),
    /// A shell window was closed. Carries the window label.
    WindowClosed(String),
}

/// Shared, ordered log of side effects.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    records: Arc<Mutex<Vec<Record>>>,
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, record: Record) {
        lock(&self.records).push(record);
    }

    /// Snapshot of every record so far.
    pub fn records(&self) -> Vec<Record> {
        lock(&self.records).clone()
    }

    /// Every envelope the backend accepted, in order.
    pub fn sent(&self) -> Vec<PlayerEventEnvelope> {
        lock(&self.records)
            .iter()
            .filter_map(|r| match r {
                Record::Sent(envelope) => Some(envelope.clone()),
                _ => None,
            })
            .collect()
    }

    /// Event names sent by one window, in order.
    pub fn sent_names(&self, window: &WindowIdentity) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|e| &e.window == window)
            .map(|e| e.event_name)
            .collect()
    }

    /// How many envelopes named `event_name` were sent (all windows).
    pub fn count(&self, event_name: &str) -> usize {
        self.sent()
            .iter()
            .filter(|e| e.event_name == event_name)
            .count()
    }

    /// Index of the first record matching `pred`.
    pub fn position(&self, pred: impl Fn(&Record) -> bool) -> Option<usize> {
        lock(&self.records).iter().position(pred)
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}
