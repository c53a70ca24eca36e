//! Scripted session: open one window per URL, simulate user and
//! window-manager activity, then have the backend close everything.

use std::sync::Arc;
use std::time::Duration;

use player_bridge::{InboundMessage, Journal, LocalBackend, LocalShellWindow, ShellSignal};
use player_common::WindowIdentity;
use player_config::PlayerConfig;
use player_controller::{ControllerConfig, ControllerHandle, ControllerReport, WindowController};
use serde_json::json;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct HarnessOptions {
    pub urls: Vec<String>,
    /// Total time the windows stay open.
    pub run_for: Duration,
}

struct OpenWindow {
    identity: WindowIdentity,
    shell: LocalShellWindow,
    handle: ControllerHandle,
    task: JoinHandle<ControllerReport>,
}

pub async fn run(options: &HarnessOptions, config: &PlayerConfig) -> Vec<ControllerReport> {
    let journal = Journal::new();
    let backend = LocalBackend::new(journal.clone());

    let mut outbound = backend.outbound();
    let logger = tokio::spawn(async move {
        while let Some(envelope) = outbound.recv().await {
            info!(
                window = %envelope.window,
                event = %envelope.event_name,
                data = %envelope.data,
                "backend received player_event"
            );
        }
    });

    let controller_config = ControllerConfig::from(config);
    let mut windows = Vec::new();
    for url in &options.urls {
        let Some(identity) = WindowIdentity::for_url(url) else {
            warn!(url = %url, "ignoring empty media url");
            continue;
        };
        let shell = LocalShellWindow::new(identity.as_str(), journal.clone());
        let (handle, task) = WindowController::spawn(
            identity.clone(),
            Arc::new(shell.clone()),
            Arc::new(backend.clone()),
            controller_config.clone(),
        );
        info!(window = %identity, url = %url, "opened player window");
        windows.push(OpenWindow {
            identity,
            shell,
            handle,
            task,
        });
    }

    let quarter = options.run_for / 4;
    tokio::time::sleep(quarter).await;

    for window in &windows {
        window.handle.play();
        let resized = window
            .shell
            .emit(ShellSignal::Resized(json!({"width": 1280, "height": 720})));
        let moved = window.shell.emit(ShellSignal::Moved(json!({"x": 64, "y": 48})));
        debug!(window = %window.identity, resized, moved, "simulated geometry changes");
    }

    tokio::time::sleep(quarter).await;
    for window in &windows {
        window.handle.pause();
    }

    tokio::time::sleep(options.run_for.saturating_sub(quarter * 2)).await;

    // Application shutdown: the backend tells every window to close.
    for window in &windows {
        backend.emit(window.identity.channel_name(), InboundMessage::close());
    }

    let mut reports = Vec::with_capacity(windows.len());
    for window in windows {
        match window.task.await {
            Ok(report) => reports.push(report),
            Err(e) => error!(window = %window.identity, error = %e, "controller task failed"),
        }
    }

    drop(backend);
    if let Err(e) = logger.await {
        warn!(error = %e, "backend logger stopped abnormally");
    }
    info!(records = journal.len(), "session finished");
    reports
}
