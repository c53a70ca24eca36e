//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod failures;
mod logging;
mod poll;

pub use failures::*;
pub use logging::*;
pub use poll::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the player windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PlayerConfig {
    pub poll: PollConfig,
    pub failures: FailureConfig,
    pub logging: LoggingConfig,
}
