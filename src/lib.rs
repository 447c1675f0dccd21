//! Uptime monitor library: probe, record, render.

pub mod alert;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod lifecycle;
pub mod observability;
pub mod probe;

pub use config::MonitorConfig;
pub use lifecycle::{CycleReport, Monitor, MonitorError};
