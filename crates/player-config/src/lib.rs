//! Player window configuration.
//!
//! TOML-based configuration for the window controllers: poll cadence,
//! failure escalation policy and log level. Every section has defaults
//! so a partial (or missing) file works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use player_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    FailureConfig, LogLevel, LoggingConfig, PlayerConfig, PollConfig, CONFIG_SCHEMA_VERSION,
};

use player_common::ConfigError;

/// Load config from the platform default path, creating it if missing,
/// and validate the result.
pub fn load_config() -> Result<PlayerConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PlayerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
