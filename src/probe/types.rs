//! Probe targets and outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// A monitored endpoint, identified by its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }

    /// URL without its scheme prefix, used for chart legends.
    pub fn label(&self) -> &str {
        self.0
            .strip_prefix("https://")
            .or_else(|| self.0.strip_prefix("http://"))
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Availability of a target in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
}

impl Status {
    pub fn is_up(self) -> bool {
        self == Status::Up
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Up => "UP",
            Status::Down => "DOWN",
        }
    }
}

/// Outcome of probing one target.
///
/// On disk a DOWN result carries latency `0`; [`ProbeResult::latency`]
/// reports it as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub url: String,
    pub status: Status,
    #[serde(rename = "latency")]
    latency_secs: f64,
}

impl ProbeResult {
    pub fn up(target: &Target, elapsed: Duration) -> Self {
        Self {
            url: target.url().to_string(),
            status: Status::Up,
            latency_secs: elapsed.as_secs_f64(),
        }
    }

    pub fn down(target: &Target) -> Self {
        Self {
            url: target.url().to_string(),
            status: Status::Down,
            latency_secs: 0.0,
        }
    }

    /// Latency in seconds, `None` when the target was down.
    pub fn latency(&self) -> Option<f64> {
        match self.status {
            Status::Up => Some(self.latency_secs.max(0.0)),
            Status::Down => None,
        }
    }

    /// Latency with the zero sentinel for DOWN results.
    pub fn latency_or_zero(&self) -> f64 {
        self.latency().unwrap_or(0.0)
    }
}

/// Why a probe was classified DOWN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("timed out after {0}s")]
    Timeout(u64),

    #[error("connection error")]
    Connect,

    #[error("status code {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),
}

impl ProbeFailure {
    /// Alert text for this failure on the given target.
    pub fn alert_message(&self, target: &Target) -> String {
        match self {
            ProbeFailure::Timeout(secs) => {
                format!("zzZ **WARNING:** {} is TIMING OUT (>{}s)", target, secs)
            }
            ProbeFailure::Connect => {
                format!("💀 **CRITICAL:** {} is UNREACHABLE (Connection Error)", target)
            }
            ProbeFailure::Status(code) => {
                format!("🚨 **ALERT:** {} is DOWN! Status Code: {}", target, code)
            }
            ProbeFailure::Request(reason) => {
                format!("💀 **CRITICAL:** {} is DOWN! ({})", target, reason)
            }
        }
    }
}
