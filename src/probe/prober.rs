//! Active endpoint probing.
//!
//! # Responsibilities
//! - Issue one bounded-timeout GET per target, in configured order
//! - Classify each target UP/DOWN and measure latency
//! - Hand every failure to the alerter exactly once

use std::time::{Duration, Instant};
use tokio::time;

use crate::alert::Alerter;
use crate::config::ProbeConfig;
use crate::observability::metrics;
use crate::probe::types::{ProbeFailure, ProbeResult, Target};

pub struct Prober {
    client: reqwest::Client,
    timeout: Duration,
}

impl Prober {
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Probe every target sequentially and alert on each failure.
    pub async fn probe_all<A: Alerter>(&self, targets: &[Target], alerter: &A) -> Vec<ProbeResult> {
        let mut results = Vec::with_capacity(targets.len());

        for target in targets {
            let result = match self.check(target).await {
                Ok(elapsed) => {
                    tracing::info!(
                        target = %target,
                        latency_secs = elapsed.as_secs_f64(),
                        "Target is UP"
                    );
                    ProbeResult::up(target, elapsed)
                }
                Err(failure) => {
                    tracing::warn!(target = %target, reason = %failure, "Target is DOWN");
                    alerter.notify(&failure.alert_message(target)).await;
                    ProbeResult::down(target)
                }
            };

            metrics::record_probe(target.url(), result.status, result.latency());
            results.push(result);
        }

        results
    }

    /// Probe a single target, returning the elapsed time on success.
    pub async fn check(&self, target: &Target) -> Result<Duration, ProbeFailure> {
        let start = Instant::now();
        let response_future = self.client.get(target.url()).send();

        match time::timeout(self.timeout, response_future).await {
            Ok(Ok(response)) => {
                let elapsed = start.elapsed();
                let status = response.status();
                if status.is_success() {
                    Ok(elapsed)
                } else {
                    Err(ProbeFailure::Status(status.as_u16()))
                }
            }
            Ok(Err(e)) if e.is_timeout() => Err(ProbeFailure::Timeout(self.timeout.as_secs())),
            Ok(Err(e)) if e.is_connect() => Err(ProbeFailure::Connect),
            Ok(Err(e)) => Err(ProbeFailure::Request(e.to_string())),
            Err(_) => Err(ProbeFailure::Timeout(self.timeout.as_secs())),
        }
    }
}
