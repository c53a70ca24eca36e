//! Configuration validation.
//!
//! Each section validator pushes human-readable messages; this
//! orchestrator collects them into a single `ConfigError`.

mod helpers;


use crate::schema::PlayerConfig;
use player_common::ConfigError;

use helpers::validate_range_u64;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PlayerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_poll(&mut errors, config);
    validate_failures(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_poll(errors: &mut Vec<String>, config: &PlayerConfig) {
    validate_range_u64(errors, "poll.interval_ms", config.poll.interval_ms, 50, 60_000);
}

fn validate_failures(errors: &mut Vec<String>, config: &PlayerConfig) {
    validate_range_u64(
        errors,
        "failures.max_consecutive_poll_failures",
        u64::from(config.failures.max_consecutive_poll_failures),
        0,
        10_000,
    );
}
