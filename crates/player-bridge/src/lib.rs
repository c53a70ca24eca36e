//! Event bridge between a player window and the backend process.
//!
//! Provides:
//! - The wire protocol: `player_event` envelopes out, `{event, data}`
//!   messages in on the window's own channel
//! - Typed outbound events and shell signals
//! - `BackendChannel` / `ShellWindow` capability traits implemented by the host
//! - `Subscription` cancellation tokens returned by every registration
//! - In-memory implementations (`local`) for harnesses and tests

pub mod channel;
pub mod events;
pub mod local;
pub mod protocol;

pub use channel::{BackendChannel, InboundHandler, ShellHandler, ShellWindow, Subscription};
pub use events::{InboundEvent, OutboundEvent, ShellSignal, ShellSignalKind};
pub use local::{Journal, LocalBackend, LocalShellWindow, Record};
pub use protocol::{InboundMessage, PlayerEventEnvelope, PLAYER_EVENT_COMMAND};
