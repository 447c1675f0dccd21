//! Rounds and the capacity-bounded history.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::probe::ProbeResult;

/// Display format of round timestamps, e.g. `Oct 19, 09:41 AM`.
pub const TIMESTAMP_FORMAT: &str = "%b %-d, %I:%M %p";

/// One pass over all targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub timestamp: String,
    pub sites: Vec<ProbeResult>,
}

impl Round {
    pub fn new(timestamp: impl Into<String>, sites: Vec<ProbeResult>) -> Self {
        Self {
            timestamp: timestamp.into(),
            sites,
        }
    }

    /// Create a round stamped with `at` in display format.
    pub fn stamped<Tz>(at: DateTime<Tz>, sites: Vec<ProbeResult>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self::new(at.format(TIMESTAMP_FORMAT).to_string(), sites)
    }

    /// Result recorded for `url` in this round, if any.
    pub fn result_for(&self, url: &str) -> Option<&ProbeResult> {
        self.sites.iter().find(|site| site.url == url)
    }
}

/// Ordered log of rounds, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `round` and evict from the front until at most `capacity` remain.
    pub fn append(mut self, round: Round, capacity: usize) -> Self {
        self.rounds.push(round);
        self.truncate_to(capacity);
        self
    }

    /// Drop the oldest rounds until at most `capacity` remain.
    pub fn truncate_to(&mut self, capacity: usize) {
        if self.rounds.len() > capacity {
            let excess = self.rounds.len() - capacity;
            self.rounds.drain(..excess);
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn latest(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl From<Vec<Round>> for History {
    fn from(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }
}
