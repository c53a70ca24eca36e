//! Typed events exchanged across the bridge.

use player_common::WindowIdentity;
use serde::{Deserialize, Serialize};

use crate::protocol::{empty_payload, InboundMessage, PlayerEventEnvelope};

/// Events a window sends to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    /// The window finished attaching.
    Ready,
    /// User asked for playback to start.
    Play,
    /// User asked for playback to pause.
    Pause,
    /// Periodic liveness / error check.
    Poll,
    /// Shell reported a geometry change. Carries the shell payload untouched.
    Resized(serde_json::Value),
    /// Shell reported a position change. Carries the shell payload untouched.
    Moved(serde_json::Value),
    /// The window is going away.
    Closed,
}

impl OutboundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Poll => "poll",
            Self::Resized(_) => "resized",
            Self::Moved(_) => "moved",
            Self::Closed => "closed",
        }
    }

    /// Shape the event into the envelope routed by `window`.
    pub fn into_envelope(self, window: &WindowIdentity) -> PlayerEventEnvelope {
        let name = self.name();
        let data = match self {
            Self::Resized(payload) | Self::Moved(payload) => payload,
            _ => empty_payload(),
        };
        PlayerEventEnvelope::new(window.clone(), name, data)
    }
}

/// Backend instructions a window understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Tear the window down.
    Close,
    /// Anything else. Ignored for forward compatibility.
    Unknown(String),
}

impl From<&InboundMessage> for InboundEvent {
    fn from(msg: &InboundMessage) -> Self {
        match msg.event.as_str() {
            "close" => Self::Close,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Kinds of window-manager signals a window subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellSignalKind {
    Resized,
    Moved,
    CloseRequested,
}

impl ShellSignalKind {
    /// Every kind, in registration order.
    pub const ALL: [ShellSignalKind; 3] = [Self::Resized, Self::Moved, Self::CloseRequested];

    /// Event name used by the desktop shell.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Resized => "tauri://resize",
            Self::Moved => "tauri://move",
            Self::CloseRequested => "tauri://close-requested",
        }
    }
}

/// A window-manager signal with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellSignal {
    Resized(serde_json::Value),
    Moved(serde_json::Value),
    CloseRequested,
}

impl ShellSignal {
    pub fn kind(&self) -> ShellSignalKind {
        match self {
            Self::Resized(_) => ShellSignalKind::Resized,
            Self::Moved(_) => ShellSignalKind::Moved,
            Self::CloseRequested => ShellSignalKind::CloseRequested,
        }
    }

    /// The outbound event this signal is forwarded as, if any.
    /// Close requests are handled locally instead of forwarded.
    pub fn forwarded(self) -> Option<OutboundEvent> {
        match self {
            Self::Resized(payload) => Some(OutboundEvent::Resized(payload)),
            Self::Moved(payload) => Some(OutboundEvent::Moved(payload)),
            Self::CloseRequested => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outbound_names() {
        assert_eq!(OutboundEvent::Ready.name(), "ready");
        assert_eq!(OutboundEvent::Play.name(), "play");
        assert_eq!(OutboundEvent::Pause.name(), "pause");
        assert_eq!(OutboundEvent::Poll.name(), "poll");
        assert_eq!(OutboundEvent::Resized(json!(null)).name(), "resized");
        assert_eq!(OutboundEvent::Moved(json!(null)).name(), "moved");
        assert_eq!(OutboundEvent::Closed.name(), "closed");
    }

    #[test]
    fn empty_events_carry_empty_object() {
        let id = WindowIdentity::new("player-1");
        let envelope = OutboundEvent::Poll.into_envelope(&id);
        assert_eq!(envelope.window, id);
        assert_eq!(envelope.event_name, "poll");
        assert_eq!(envelope.data, json!({}));
    }

    #[test]
    fn geometry_payload_is_forwarded_verbatim() {
        let id = WindowIdentity::new("player-1");
        let payload = json!({"width": 800, "height": 600});
        let envelope = OutboundEvent::Resized(payload.clone()).into_envelope(&id);
        assert_eq!(envelope.event_name, "resized");
        assert_eq!(envelope.data, payload);
    }

    #[test]
    fn inbound_close_is_recognized() {
        let event = InboundEvent::from(&InboundMessage::close());
        assert_eq!(event, InboundEvent::Close);
    }

    #[test]
    fn inbound_unknown_tag() {
        let msg = InboundMessage::new("foo", json!({"x": 1}));
        assert_eq!(InboundEvent::from(&msg), InboundEvent::Unknown("foo".into()));
    }

    #[test]
    fn inbound_match_is_case_sensitive() {
        let msg = InboundMessage::new("CLOSE", json!(null));
        assert_eq!(InboundEvent::from(&msg), InboundEvent::Unknown("CLOSE".into()));
    }

    #[test]
    fn shell_signal_kinds() {
        assert_eq!(ShellSignal::Resized(json!({})).kind(), ShellSignalKind::Resized);
        assert_eq!(ShellSignal::Moved(json!({})).kind(), ShellSignalKind::Moved);
        assert_eq!(ShellSignal::CloseRequested.kind(), ShellSignalKind::CloseRequested);
    }

    #[test]
    fn shell_event_names() {
        assert_eq!(ShellSignalKind::Resized.event_name(), "tauri://resize");
        assert_eq!(ShellSignalKind::Moved.event_name(), "tauri://move");
        assert_eq!(
            ShellSignalKind::CloseRequested.event_name(),
            "tauri://close-requested"
        );
    }

    #[test]
    fn shell_signals_forward_one_to_one() {
        let payload = json!({"x": 10, "y": 20});
        assert_eq!(
            ShellSignal::Moved(payload.clone()).forwarded(),
            Some(OutboundEvent::Moved(payload))
        );
        assert_eq!(ShellSignal::CloseRequested.forwarded(), None);
    }
}
