//! Uptime Monitor
//!
//! Probes a fixed list of URLs once, records the round in a capped JSON
//! history, alerts a webhook on failures and renders a static HTML dashboard.
//! Meant to be run by an external scheduler (cron, systemd timer, CI).
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────┐    ┌──────────────┐    ┌────────────────────┐
//!   │  probe   │───▶│   history    │───▶│     dashboard      │
//!   │  Prober  │    │ HistoryStore │    │ DashboardRenderer  │
//!   └────┬─────┘    └──────┬───────┘    └─────────┬──────────┘
//!        │ DOWN            │                      │
//!        ▼                 ▼                      ▼
//!   ┌──────────┐    config/history.json    public/dashboard.html
//!   │  alert   │
//!   │ webhook  │
//!   └──────────┘
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

use uptime_monitor::alert::WebhookAlerter;
use uptime_monitor::config::resolve_config;
use uptime_monitor::observability::{logging, metrics};
use uptime_monitor::Monitor;

#[derive(Parser)]
#[command(name = "uptime-monitor")]
#[command(about = "Run one uptime check and refresh the dashboard", long_about = None)]
struct Cli {
    /// TOML config file (defaults to ./monitor.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    let config = resolve_config(cli.config.as_deref())?;
    logging::init_logging(&config.observability);

    tracing::info!(
        targets = config.targets.len(),
        history_path = %config.history.path,
        dashboard_path = %config.dashboard.path,
        alerting = config.alert.webhook_url.is_some(),
        "uptime-monitor v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let metrics_handle = match &config.observability.metrics_textfile {
        Some(_) => match metrics::init_metrics() {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install metrics recorder");
                None
            }
        },
        None => None,
    };

    let alerter = WebhookAlerter::new(&config.alert)?;
    let monitor = Monitor::new(&config, alerter)?;
    let outcome = monitor.run_once().await;

    if let (Some(handle), Some(path)) = (&metrics_handle, &config.observability.metrics_textfile) {
        if let Err(e) = metrics::write_textfile(handle, Path::new(path)) {
            tracing::warn!(path = %path, error = %e, "Failed to write metrics textfile");
        }
    }

    match outcome {
        Ok(report) => {
            tracing::info!(dashboard = %report.dashboard_path.display(), "Cycle finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Cycle failed");
            Err(e.into())
        }
    }
}
