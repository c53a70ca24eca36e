use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use player_common::BridgeError;
use tracing::{debug, trace};

use super::{lock, Journal, Record};
use crate::channel::{ShellHandler, ShellWindow, Subscription};
use crate::events::{ShellSignal, ShellSignalKind};

type Listeners = HashMap<ShellSignalKind, Vec<(u64, Arc<ShellHandler>)>>;

struct ShellInner {
    label: String,
    journal: Journal,
    listeners: Mutex<Listeners>,
    failing: Mutex<HashSet<ShellSignalKind>>,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl ShellInner {
    fn remove_listener(&self, kind: ShellSignalKind, id: u64) {
        let removed = lock(&self.listeners).get_mut(&kind).is_some_and(|handlers| {
            let before = handlers.len();
            handlers.retain(|(i, _)| *i != id);
            handlers.len() != before
        });
        if removed {
            trace!(window = %self.label, event = kind.event_name(), "shell listener removed");
            self.journal
                .push(Record::Unlistened(kind.event_name().to_string()));
        }
    }
}

/// In-process stand-in for a desktop shell window.
#[derive(Clone)]
pub struct LocalShellWindow {
    inner: Arc<ShellInner>,
}

impl LocalShellWindow {
    pub fn new(label: impl Into<String>, journal: Journal) -> Self {
        Self {
            inner: Arc::new(ShellInner {
                label: label.into(),
                journal,
                listeners: Mutex::new(HashMap::new()),
                failing: Mutex::new(HashSet::new()),
                next_id: AtomicU64::new(1),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Deliver a window-manager signal. Returns how many handlers ran.
    pub fn emit(&self, signal: ShellSignal) -> usize {
        let handlers: Vec<Arc<ShellHandler>> = lock(&self.inner.listeners)
            .get(&signal.kind())
            .map(|v| v.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();
        for handler in &handlers {
            handler(signal.clone());
        }
        handlers.len()
    }

    pub fn listener_count(&self, kind: ShellSignalKind) -> usize {
        lock(&self.inner.listeners).get(&kind).map_or(0, Vec::len)
    }

    /// Make future `listen` calls for `kind` fail.
    pub fn fail_listen(&self, kind: ShellSignalKind) {
        lock(&self.inner.failing).insert(kind);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShellWindow for LocalShellWindow {
    fn label(&self) -> &str {
        &self.inner.label
    }

    async fn listen(
        &self,
        kind: ShellSignalKind,
        handler: ShellHandler,
    ) -> Result<Subscription, BridgeError> {
        if lock(&self.inner.failing).contains(&kind) {
            return Err(BridgeError::ListenFailed(kind.event_name().to_string()));
        }
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        lock(&self.inner.listeners)
            .entry(kind)
            .or_default()
            .push((id, Arc::new(handler)));

        let inner = Arc::clone(&self.inner);
        Ok(Subscription::new(kind.event_name(), move || {
            inner.remove_listener(kind, id)
        }))
    }

    async fn close(&self) -> Result<(), BridgeError> {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return Err(BridgeError::WindowClose(format!(
                "{} is already closed",
                self.inner.label
            )));
        }
        debug!(window = %self.inner.label, "shell window closed");
        self.inner
            .journal
            .push(Record::WindowClosed(self.inner.label.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (ShellHandler, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let handler: ShellHandler = Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (handler, hits)
    }

    #[tokio::test]
    async fn listeners_filter_by_kind() {
        let shell = LocalShellWindow::new("player-1", Journal::new());
        let (handler, hits) = counter();
        let _sub = shell.listen(ShellSignalKind::Resized, handler).await.unwrap();

        assert_eq!(shell.emit(ShellSignal::Resized(json!({"width": 1}))), 1);
        assert_eq!(shell.emit(ShellSignal::Moved(json!({"x": 1}))), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancel_records_shell_event_name() {
        let journal = Journal::new();
        let shell = LocalShellWindow::new("player-1", journal.clone());
        let (handler, _) = counter();
        let sub = shell.listen(ShellSignalKind::Moved, handler).await.unwrap();
        assert_eq!(sub.label(), "tauri://move");

        drop(sub);
        assert_eq!(shell.listener_count(ShellSignalKind::Moved), 0);
        assert_eq!(journal.records(), vec![Record::Unlistened("tauri://move".into())]);
    }

    #[tokio::test]
    async fn failing_kind_rejects_listen() {
        let shell = LocalShellWindow::new("player-1", Journal::new());
        shell.fail_listen(ShellSignalKind::CloseRequested);
        let (handler, _) = counter();
        let err = shell
            .listen(ShellSignalKind::CloseRequested, handler)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::ListenFailed(_)));
    }

    #[tokio::test]
    async fn second_close_errors() {
        let journal = Journal::new();
        let shell = LocalShellWindow::new("player-1", journal.clone());
        shell.close().await.unwrap();
        assert!(shell.is_closed());
        assert!(shell.close().await.is_err());
        assert_eq!(journal.records(), vec![Record::WindowClosed("player-1".into())]);
    }
}
