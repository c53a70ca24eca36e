mod cli;
mod harness;

use std::path::Path;

use player_common::ConfigError;
use player_config::{validation, PlayerConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "player=info";

/// Load the config override when given, else the platform default.
fn load_config(path: Option<&str>) -> Result<PlayerConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = player_config::toml_loader::load_from_path(Path::new(path))?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => player_config::load_config(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config comes first so its log level can seed the filter
    let loaded = load_config(args.config.as_deref());
    let log_directive = args.log_level.clone().unwrap_or_else(|| {
        loaded
            .as_ref()
            .map(|c| c.logging.directive())
            .unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string())
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("player-harness v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PlayerConfig::default()
    });
    tracing::debug!("Config: {}", player_config::config_to_json(&config));
    tracing::info!(
        poll_ms = config.poll.interval_ms,
        max_poll_failures = config.failures.max_consecutive_poll_failures,
        strict_registration = config.failures.strict_registration,
        "Config loaded"
    );

    let options = args.harness_options();
    let reports = harness::run(&options, &config).await;

    for report in &reports {
        tracing::info!(
            window = %report.identity,
            state = %report.state,
            trigger = ?report.trigger,
            sent = report.sent,
            failed = report.failed,
            "Player window summary"
        );
    }
    tracing::info!("Shutdown complete");
}
