//! History persistence.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::HistoryConfig;
use crate::history::round::{History, Round};
use crate::observability::metrics;

/// Errors raised while writing history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to write history file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// JSON-file backed history with a fixed capacity.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            capacity: config.capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load persisted history.
    ///
    /// A missing or unreadable file yields an empty history.
    pub fn load(&self) -> History {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "No history file found, starting fresh");
            return History::new();
        }

        let parsed = File::open(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|file| {
                serde_json::from_reader::<_, History>(BufReader::new(file)).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(mut history) => {
                if history.len() > self.capacity {
                    tracing::info!(
                        loaded = history.len(),
                        capacity = self.capacity,
                        "Trimming history to capacity"
                    );
                    history.truncate_to(self.capacity);
                }
                tracing::debug!(rounds = history.len(), "Loaded history");
                history
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %error,
                    "History file corrupted, starting fresh"
                );
                History::new()
            }
        }
    }

    /// Append a round, evicting the oldest beyond capacity.
    pub fn append(&self, history: History, round: Round) -> History {
        history.append(round, self.capacity)
    }

    /// Overwrite the history file with `history`.
    pub fn persist(&self, history: &History) -> Result<(), HistoryError> {
        let io_err = |source| HistoryError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, history)?;
        writer.flush().map_err(io_err)?;

        metrics::record_history_size(history.len());
        tracing::info!(rounds = history.len(), path = %self.path.display(), "Saved history");
        Ok(())
    }
}
