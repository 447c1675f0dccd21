//! One check-record-render cycle.

use chrono::{DateTime, Local};
use std::path::PathBuf;
use thiserror::Error;

use crate::alert::Alerter;
use crate::config::MonitorConfig;
use crate::dashboard::{DashboardRenderer, DashboardView, HostMetrics, RenderError};
use crate::history::{HistoryError, HistoryStore, Round};
use crate::probe::{Prober, Target};

/// Failures that abort a cycle.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Outcome of a completed cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub round: Round,
    pub history_len: usize,
    pub dashboard_path: PathBuf,
}

impl CycleReport {
    pub fn down_count(&self) -> usize {
        self.round.sites.iter().filter(|s| !s.status.is_up()).count()
    }
}

/// Probes the targets, records the round and renders the dashboard.
pub struct Monitor<A> {
    targets: Vec<Target>,
    prober: Prober,
    store: HistoryStore,
    renderer: DashboardRenderer,
    alerter: A,
}

impl<A: Alerter> Monitor<A> {
    pub fn new(config: &MonitorConfig, alerter: A) -> Result<Self, MonitorError> {
        Ok(Self {
            targets: config.targets.iter().map(Target::new).collect(),
            prober: Prober::new(&config.probe)?,
            store: HistoryStore::new(&config.history),
            renderer: DashboardRenderer::new(&config.dashboard),
            alerter,
        })
    }

    /// Run exactly one cycle.
    ///
    /// Probe and alert failures are contained; history and dashboard write
    /// failures end the cycle with an error.
    pub async fn run_once(&self) -> Result<CycleReport, MonitorError> {
        self.run_started_at(Local::now()).await
    }

    /// Run one cycle whose round is stamped with `started_at`.
    ///
    /// The stamp is the time the check began, not when probing finished.
    pub async fn run_started_at(
        &self,
        started_at: DateTime<Local>,
    ) -> Result<CycleReport, MonitorError> {
        tracing::info!(targets = self.targets.len(), "Starting check");

        let results = self.prober.probe_all(&self.targets, &self.alerter).await;
        let round = Round::stamped(started_at, results);

        let history = self.store.load();
        let history = self.store.append(history, round.clone());
        self.store.persist(&history)?;

        let view = DashboardView::build(
            &history,
            &self.targets,
            HostMetrics::collect(),
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        );
        let dashboard_path = self.renderer.write(&view)?.to_path_buf();

        let report = CycleReport {
            round,
            history_len: history.len(),
            dashboard_path,
        };
        tracing::info!(
            up = report.round.sites.len() - report.down_count(),
            down = report.down_count(),
            history_len = report.history_len,
            "Check complete"
        );
        Ok(report)
    }
}
