//! Wire protocol between a player window and the backend.
//!
//! Messages flow in both directions:
//! - **Window -> backend**: every outbound event is wrapped in a
//!   `PlayerEventEnvelope` and delivered through the `player_event` command.
//! - **Backend -> window**: the backend emits `{ "event": ..., "data": ... }`
//!   on a channel named after the window identity.

use player_common::WindowIdentity;
use serde::{Deserialize, Serialize};

/// Command name the backend registers for window -> backend events.
pub const PLAYER_EVENT_COMMAND: &str = "player_event";

/// Payload used for events that carry no data.
pub fn empty_payload() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Outbound record delivered via `player_event`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEventEnvelope {
    /// Routing key: the identity of the sending window.
    pub window: WindowIdentity,
    /// One of the outbound event names.
    pub event_name: String,
    /// Opaque payload, forwarded verbatim.
    pub data: serde_json::Value,
}

impl PlayerEventEnvelope {
    pub fn new(
        window: WindowIdentity,
        event_name: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            window,
            event_name: event_name.into(),
            data,
        }
    }

    /// Serialize to the JSON argument object of the `player_event` command.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

/// A message pushed by the backend on a window's channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Event tag; dispatch is by exact match.
    pub event: String,
    /// Payload; `null` when the backend omits it.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl InboundMessage {
    pub fn new(event: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// The instruction the backend sends when the application shuts down.
    pub fn close() -> Self {
        Self::new("close", serde_json::Value::Null)
    }

    /// Parse a backend message from raw JSON.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_uses_camel_case_keys() {
        let envelope = PlayerEventEnvelope::new(
            WindowIdentity::new("player-1"),
            "resized",
            json!({"width": 800, "height": 600}),
        );
        let value: serde_json::Value = serde_json::from_str(&envelope.to_json()).unwrap();
        assert_eq!(value["window"], "player-1");
        assert_eq!(value["eventName"], "resized");
        assert_eq!(value["data"]["width"], 800);
        assert!(value.get("event_name").is_none());
    }

    #[test]
    fn empty_payload_is_empty_object() {
        assert_eq!(empty_payload(), json!({}));
    }

    #[test]
    fn inbound_from_json_with_data() {
        let msg = InboundMessage::from_json(r#"{"event":"close","data":{"reason":"exit"}}"#)
            .unwrap();
        assert_eq!(msg.event, "close");
        assert_eq!(msg.data["reason"], "exit");
    }

    #[test]
    fn inbound_data_defaults_to_null() {
        let msg = InboundMessage::from_json(r#"{"event":"close"}"#).unwrap();
        assert_eq!(msg, InboundMessage::close());
        assert!(msg.data.is_null());
    }

    #[test]
    fn inbound_rejects_missing_tag() {
        assert!(InboundMessage::from_json(r#"{"data":1}"#).is_none());
        assert!(InboundMessage::from_json("not json").is_none());
    }

    #[test]
    fn command_name() {
        assert_eq!(PLAYER_EVENT_COMMAND, "player_event");
    }
}
