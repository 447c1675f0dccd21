//! View types for dashboard rendering.
//!
//! Built by pure functions from history, targets and host metrics so the
//! template only formats what it is given.

use serde::Serialize;

use crate::dashboard::host::HostMetrics;
use crate::history::{History, Round};
use crate::probe::Target;

/// Series colors, cycled by target index.
pub const PALETTE: [&str; 5] = ["#2ecc71", "#3498db", "#9b59b6", "#f1c40f", "#e67e22"];

const POINT_RADIUS: u8 = 3;

/// Chart.js `data` object: one label per round, one dataset per target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LatencySeries>,
}

/// Latency series of one target across the history.
///
/// `data` holds `0` where the round has no result for the target;
/// `point_radius` is `0` at those points so they are not drawn as measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencySeries {
    pub label: String,
    pub data: Vec<f64>,
    pub point_radius: Vec<u8>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub tension: f64,
    pub fill: bool,
}

impl ChartData {
    pub fn from_history(history: &History, targets: &[Target]) -> Self {
        let labels = history
            .rounds()
            .iter()
            .map(|round| round.timestamp.clone())
            .collect();

        let datasets = targets
            .iter()
            .enumerate()
            .map(|(index, target)| LatencySeries::for_target(history, target, index))
            .collect();

        Self { labels, datasets }
    }
}

impl LatencySeries {
    fn for_target(history: &History, target: &Target, index: usize) -> Self {
        let points: Vec<Option<f64>> = history
            .rounds()
            .iter()
            .map(|round| round.result_for(target.url()).map(|r| r.latency_or_zero()))
            .collect();

        let color = PALETTE[index % PALETTE.len()];
        Self {
            label: target.label().to_string(),
            data: points.iter().map(|p| p.unwrap_or(0.0)).collect(),
            point_radius: points
                .iter()
                .map(|p| if p.is_some() { POINT_RADIUS } else { 0 })
                .collect(),
            border_color: color,
            background_color: color,
            tension: 0.4,
            fill: false,
        }
    }
}

/// One line of the current-status list.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub url: String,
    pub up: bool,
    pub latency_display: String,
}

impl StatusRow {
    pub fn from_round(round: &Round) -> Vec<Self> {
        round
            .sites
            .iter()
            .map(|site| Self {
                url: site.url.clone(),
                up: site.status.is_up(),
                latency_display: format!("{:.3}s", site.latency_or_zero()),
            })
            .collect()
    }
}

/// Everything the dashboard template needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub generated_at: String,
    pub chart: ChartData,
    pub status: Vec<StatusRow>,
    pub host: HostMetrics,
}

impl DashboardView {
    /// Build the view for `history`, whose latest round is the current one.
    pub fn build(
        history: &History,
        targets: &[Target],
        host: HostMetrics,
        generated_at: impl Into<String>,
    ) -> Self {
        Self {
            generated_at: generated_at.into(),
            chart: ChartData::from_history(history, targets),
            status: history.latest().map(StatusRow::from_round).unwrap_or_default(),
            host,
        }
    }

    pub fn up_count(&self) -> usize {
        self.status.iter().filter(|row| row.up).count()
    }
}
