//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the uptime monitor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// URLs probed every cycle, in probe order.
    pub targets: Vec<String>,

    /// Probe settings.
    pub probe: ProbeConfig,

    /// History persistence settings.
    pub history: HistoryConfig,

    /// Dashboard output settings.
    pub dashboard: DashboardConfig,

    /// Alert webhook settings.
    pub alert: AlertConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            targets: vec![
                "https://google.com".to_string(),
                "https://github.com/nuafal".to_string(),
                "https://this-site-does-not-exist-123.com".to_string(),
            ],
            probe: ProbeConfig::default(),
            history: HistoryConfig::default(),
            dashboard: DashboardConfig::default(),
            alert: AlertConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-probe timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every probe.
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// History persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path of the JSON history file.
    pub path: String,

    /// Maximum number of rounds kept (oldest evicted first).
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: "config/history.json".to_string(),
            capacity: 50,
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Output path of the rendered HTML document.
    pub path: String,

    /// Page title.
    pub title: String,

    /// Browser auto-refresh interval in seconds.
    pub refresh_secs: u64,

    /// Chart.js script location.
    pub chart_script_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            path: "public/dashboard.html".to_string(),
            title: "Uptime Dashboard".to_string(),
            refresh_secs: 30,
            chart_script_url: "https://cdn.jsdelivr.net/npm/chart.js".to_string(),
        }
    }
}

/// Alert webhook configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Webhook destination. Alerting is disabled when unset.
    pub webhook_url: Option<String>,

    /// Timeout for the webhook POST in seconds.
    pub timeout_secs: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Optional Prometheus textfile written at the end of each cycle.
    pub metrics_textfile: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_textfile: None,
        }
    }
}
