use std::time::Duration;

use clap::Parser;

use crate::harness::HarnessOptions;

/// Media opened when no `--url` is given.
pub const DEFAULT_URL: &str = "https://example.com/media/sample.mp4";

/// player-harness: drives player windows against an in-memory backend.
#[derive(Parser, Debug)]
#[command(name = "player-harness", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. `player=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Media URL to open. Repeat for several windows.
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Milliseconds the windows stay open before the backend closes them.
    #[arg(long, default_value_t = 1600)]
    pub run_ms: u64,
}

impl Args {
    pub fn harness_options(&self) -> HarnessOptions {
        let urls = if self.urls.is_empty() {
            vec![DEFAULT_URL.to_string()]
        } else {
            self.urls.clone()
        };
        HarnessOptions {
            urls,
            run_for: Duration::from_millis(self.run_ms),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
