use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use player_common::BridgeError;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::{lock, Journal, Record};
use crate::channel::{BackendChannel, InboundHandler, Subscription};
use crate::protocol::{InboundMessage, PlayerEventEnvelope};

type Listeners = HashMap<String, Vec<(u64, Arc<InboundHandler>)>>;

struct BackendInner {
    journal: Journal,
    listeners: Mutex<Listeners>,
    outbound: Mutex<Vec<mpsc::UnboundedSender<PlayerEventEnvelope>>>,
    next_id: AtomicU64,
    fail_sends: AtomicBool,
    unavailable: AtomicBool,
}

impl BackendInner {
    fn remove_listener(&self, channel: &str, id: u64) {
        let removed = {
            let mut listeners = lock(&self.listeners);
            match listeners.get_mut(channel) {
                Some(handlers) => {
                    let before = handlers.len();
                    handlers.retain(|(i, _)| *i != id);
                    let removed = handlers.len() != before;
                    if handlers.is_empty() {
                        listeners.remove(channel);
                    }
                    removed
                }
                None => false,
            }
        };
        if removed {
            trace!(channel, id, "backend listener removed");
            self.journal.push(Record::Unlistened(channel.to_string()));
        }
    }
}

/// In-process backend: records every envelope and lets callers push
/// messages onto named channels.
#[derive(Clone)]
pub struct LocalBackend {
    inner: Arc<BackendInner>,
}

impl LocalBackend {
    pub fn new(journal: Journal) -> Self {
        Self {
            inner: Arc::new(BackendInner {
                journal,
                listeners: Mutex::new(HashMap::new()),
                outbound: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                fail_sends: AtomicBool::new(false),
                unavailable: AtomicBool::new(false),
            }),
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.inner.journal
    }

    /// Push `message` to every listener on `channel`. Returns how many
    /// handlers received it.
    pub fn emit(&self, channel: &str, message: InboundMessage) -> usize {
        let handlers: Vec<Arc<InboundHandler>> = lock(&self.inner.listeners)
            .get(channel)
            .map(|v| v.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();
        for handler in &handlers {
            handler(message.clone());
        }
        handlers.len()
    }

    /// Stream of accepted envelopes, in send order.
    pub fn outbound(&self) -> mpsc::UnboundedReceiver<PlayerEventEnvelope> {
        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.inner.outbound).push(tx);
        rx
    }

    pub fn listener_count(&self, channel: &str) -> usize {
        lock(&self.inner.listeners)
            .get(channel)
            .map_or(0, Vec::len)
    }

    /// Make every subsequent `send` fail.
    pub fn set_fail_sends(&self, fail: bool) {
        self.inner.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `subscribe` fail.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl BackendChannel for LocalBackend {
    async fn send(&self, envelope: PlayerEventEnvelope) -> Result<(), BridgeError> {
        if self.inner.fail_sends.load(Ordering::SeqCst) {
            return Err(BridgeError::SendFailed(format!(
                "backend rejected {} from {}",
                envelope.event_name, envelope.window
            )));
        }
        debug!(window = %envelope.window, event = %envelope.event_name, "player_event");
        self.inner.journal.push(Record::Sent(envelope.clone()));
        lock(&self.inner.outbound).retain(|tx| tx.send(envelope.clone()).is_ok());
        Ok(())
    }

    async fn subscribe(
        &self,
        channel: &str,
        handler: InboundHandler,
    ) -> Result<Subscription, BridgeError> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(BridgeError::ChannelUnavailable(channel.to_string()));
        }
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        lock(&self.inner.listeners)
            .entry(channel.to_string())
            .or_default()
            .push((id, Arc::new(handler)));
        trace!(channel, id, "backend listener added");

        let inner = Arc::clone(&self.inner);
        let name = channel.to_string();
        Ok(Subscription::new(channel, move || {
            inner.remove_listener(&name, id)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_common::WindowIdentity;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (InboundHandler, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let handler: InboundHandler = Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (handler, hits)
    }

    #[tokio::test]
    async fn emit_reaches_channel_listeners_only() {
        let backend = LocalBackend::new(Journal::new());
        let (handler, hits) = counter();
        let _sub = backend.subscribe("player-1", handler).await.unwrap();

        assert_eq!(backend.emit("player-1", InboundMessage::close()), 1);
        assert_eq!(backend.emit("player-2", InboundMessage::close()), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancel_removes_listener_and_records_it() {
        let backend = LocalBackend::new(Journal::new());
        let (handler, hits) = counter();
        let mut sub = backend.subscribe("player-1", handler).await.unwrap();
        assert_eq!(backend.listener_count("player-1"), 1);

        sub.cancel();
        assert_eq!(backend.listener_count("player-1"), 0);
        assert_eq!(backend.emit("player-1", InboundMessage::close()), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(
            backend.journal().records(),
            vec![Record::Unlistened("player-1".into())]
        );
    }

    #[tokio::test]
    async fn send_records_and_streams_envelope() {
        let backend = LocalBackend::new(Journal::new());
        let mut rx = backend.outbound();
        let envelope = PlayerEventEnvelope::new(WindowIdentity::new("player-1"), "ready", json!({}));

        backend.send(envelope.clone()).await.unwrap();
        assert_eq!(backend.journal().sent(), vec![envelope.clone()]);
        assert_eq!(rx.recv().await, Some(envelope));
    }

    #[tokio::test]
    async fn failing_send_is_not_recorded() {
        let backend = LocalBackend::new(Journal::new());
        backend.set_fail_sends(true);
        let envelope = PlayerEventEnvelope::new(WindowIdentity::new("player-1"), "poll", json!({}));

        let err = backend.send(envelope).await.unwrap_err();
        assert!(matches!(err, BridgeError::SendFailed(_)));
        assert!(backend.journal().is_empty());
    }

    #[tokio::test]
    async fn unavailable_backend_rejects_subscribe() {
        let backend = LocalBackend::new(Journal::new());
        backend.set_unavailable(true);
        let (handler, _) = counter();
        let err = backend.subscribe("player-1", handler).await.unwrap_err();
        assert_eq!(err, BridgeError::ChannelUnavailable("player-1".into()));
    }

    #[tokio::test]
    async fn dropped_outbound_receiver_is_pruned() {
        let backend = LocalBackend::new(Journal::new());
        drop(backend.outbound());
        let envelope = PlayerEventEnvelope::new(WindowIdentity::new("player-1"), "play", json!({}));
        backend.send(envelope).await.unwrap();
        assert_eq!(backend.journal().count("play"), 1);
    }
}
