//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! monitor.toml (optional) + .env / environment
//!     → loader.rs (parse, deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → passed by reference into each component constructor
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{
    AlertConfig, DashboardConfig, HistoryConfig, MonitorConfig, ObservabilityConfig, ProbeConfig,
};
