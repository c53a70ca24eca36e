//! Per-window lifecycle controller for media player windows.
//!
//! A [`WindowController`] owns everything one player window registers:
//! the backend channel subscription, the three shell listeners and the
//! poll timer. It runs as a single task draining a mailbox, so listener
//! callbacks and timer ticks never touch controller state directly.
//!
//! ```text
//! Uninitialized --attach--> Attached --close--> Detached
//! ```

mod controller;
mod handle;
mod timer;
mod types;

pub use controller::WindowController;
pub use handle::ControllerHandle;
pub use timer::PollTimer;
pub use types::{
    CloseTrigger, ControllerConfig, ControllerEvent, ControllerReport, LifecycleState, UserAction,
};
