//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monitor_probes_total` (counter): probes by status
//! - `monitor_probe_latency_seconds` (histogram): latency of UP probes
//! - `monitor_target_up` (gauge): 1=UP, 0=DOWN, per target
//! - `monitor_alerts_total` (counter): alerts by outcome
//! - `monitor_history_rounds` (gauge): rounds kept after the last save
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - A one-shot run has no scrape endpoint, so the Prometheus rendering is
//!   written to a textfile for node-exporter style collection

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::fs;
use std::path::Path;

use crate::probe::Status;

/// Install the global Prometheus recorder.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Write the current exposition to `path`.
pub fn write_textfile(handle: &PrometheusHandle, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, handle.render())
}

pub fn record_probe(target: &str, status: Status, latency_secs: Option<f64>) {
    metrics::counter!("monitor_probes_total", "status" => status.as_str()).increment(1);
    metrics::gauge!("monitor_target_up", "target" => target.to_string())
        .set(if status.is_up() { 1.0 } else { 0.0 });
    if let Some(latency) = latency_secs {
        metrics::histogram!("monitor_probe_latency_seconds", "target" => target.to_string())
            .record(latency);
    }
}

pub fn record_alert(outcome: &'static str) {
    metrics::counter!("monitor_alerts_total", "outcome" => outcome).increment(1);
}

pub fn record_history_size(rounds: usize) {
    metrics::gauge!("monitor_history_rounds").set(rounds as f64);
}
