//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::MonitorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "monitor.toml";

/// Environment variable carrying the alert webhook destination.
pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Load a TOML file, resolving environment overrides through `lookup`.
pub fn load_config_with<F>(path: &Path, lookup: F) -> Result<MonitorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let content = fs::read_to_string(path)?;
    let config: MonitorConfig = toml::from_str(&content)?;
    finish(config, lookup)
}

/// Resolve the effective configuration from the working directory.
///
/// An explicit path must exist. Without one, `monitor.toml` in the working
/// directory is used when present, otherwise the built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<MonitorConfig, ConfigError> {
    resolve_config_in(Path::new("."), explicit, |key| std::env::var(key).ok())
}

/// Resolve the effective configuration relative to `dir`.
pub fn resolve_config_in<F>(
    dir: &Path,
    explicit: Option<&Path>,
    lookup: F,
) -> Result<MonitorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return load_config_with(path, lookup);
    }

    let fallback = dir.join(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        tracing::debug!(path = %fallback.display(), "Using config file from working directory");
        return load_config_with(&fallback, lookup);
    }

    finish(MonitorConfig::default(), lookup)
}

fn finish<F>(mut config: MonitorConfig, lookup: F) -> Result<MonitorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_env_overrides(&mut config, lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides using the supplied lookup.
///
/// An empty `DISCORD_WEBHOOK_URL` disables alerting.
pub fn apply_env_overrides<F>(config: &mut MonitorConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(webhook) = lookup(WEBHOOK_ENV) {
        let webhook = webhook.trim();
        config.alert.webhook_url = if webhook.is_empty() {
            None
        } else {
            Some(webhook.to_string())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_env_override_sets_webhook() {
        let mut config = MonitorConfig::default();
        apply_env_overrides(&mut config, |key| {
            (key == WEBHOOK_ENV).then(|| "https://hooks.example.com/x".to_string())
        });
        assert_eq!(config.alert.webhook_url.as_deref(), Some("https://hooks.example.com/x"));
    }

    #[test]
    fn test_empty_env_disables_webhook() {
        let mut config = MonitorConfig::default();
        config.alert.webhook_url = Some("https://hooks.example.com/x".into());
        apply_env_overrides(&mut config, |_| Some("  ".to_string()));
        assert!(config.alert.webhook_url.is_none());
    }

    #[test]
    fn test_absent_env_keeps_file_value() {
        let mut config = MonitorConfig::default();
        config.alert.webhook_url = Some("https://hooks.example.com/x".into());
        apply_env_overrides(&mut config, |_| None);
        assert!(config.alert.webhook_url.is_some());
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "targets = []").unwrap();

        match load_config(file.path()) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::NoTargets]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "targets = [").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_picks_up_monitor_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "targets = [\"https://fallback.example\"]\n[history]\ncapacity = 7\n",
        )
        .unwrap();

        let config = resolve_config_in(dir.path(), None, no_env).unwrap();
        assert_eq!(config.targets, vec!["https://fallback.example"]);
        assert_eq!(config.history.capacity, 7);
    }

    #[test]
    fn test_resolve_without_file_uses_defaults_and_env() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config_in(dir.path(), None, |key| {
            (key == WEBHOOK_ENV).then(|| "https://hooks.example.com/x".to_string())
        })
        .unwrap();

        assert_eq!(config.targets, MonitorConfig::default().targets);
        assert_eq!(config.alert.webhook_url.as_deref(), Some("https://hooks.example.com/x"));
    }

    #[test]
    fn test_explicit_path_wins_over_monitor_toml() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(fallback, "targets = [\"https://fallback.example\"]\n").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "targets = [\"https://explicit.example\"]\n").unwrap();

        let config = resolve_config_in(dir.path(), Some(&explicit), no_env).unwrap();
        assert_eq!(config.targets, vec!["https://explicit.example"]);
    }

    #[test]
    fn test_invalid_monitor_toml_is_not_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "targets = [").unwrap();
        assert!(matches!(
            resolve_config_in(dir.path(), None, no_env),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let result = resolve_config(Some(Path::new("/nonexistent/monitor.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
