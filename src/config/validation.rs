//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate target and webhook URLs
//! - Validate value ranges (timeouts > 0, capacity > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;
use url::Url;

use crate::config::schema::MonitorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no targets configured")]
    NoTargets,

    #[error("invalid target URL '{url}': {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("duplicate target '{0}'")]
    DuplicateTarget(String),

    #[error("invalid webhook URL: {0}")]
    InvalidWebhook(String),

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.targets.is_empty() {
        errors.push(ValidationError::NoTargets);
    }

    let mut seen = HashSet::new();
    for target in &config.targets {
        if let Err(reason) = check_http_url(target) {
            errors.push(ValidationError::InvalidTarget {
                url: target.clone(),
                reason,
            });
        }
        if !seen.insert(target.as_str()) {
            errors.push(ValidationError::DuplicateTarget(target.clone()));
        }
    }

    if let Some(webhook) = &config.alert.webhook_url {
        if let Err(reason) = check_http_url(webhook) {
            errors.push(ValidationError::InvalidWebhook(reason));
        }
    }

    let seconds = [
        ("probe.timeout_secs", config.probe.timeout_secs),
        ("alert.timeout_secs", config.alert.timeout_secs),
        ("dashboard.refresh_secs", config.dashboard.refresh_secs),
    ];
    for (field, value) in seconds {
        if value == 0 {
            errors.push(ValidationError::Zero { field });
        }
    }
    if config.history.capacity == 0 {
        errors.push(ValidationError::Zero {
            field: "history.capacity",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}
