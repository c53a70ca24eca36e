//! Reading `config.toml` into a [`PlayerConfig`].

use crate::schema::PlayerConfig;
use crate::validation;
use player_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the TOML file at `path`.
///
/// Absent keys fall back to their defaults. Out-of-range values are only
/// warned about here; `load_config` is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<PlayerConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;

    let config: PlayerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), error = %e, "config has out-of-range values");
    }

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Read `<config_dir>/player-windows/config.toml`, writing the commented
/// template there first when no file exists yet.
pub fn load_default() -> Result<PlayerConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(PlayerConfig::default())
        }
        other => other,
    }
}
