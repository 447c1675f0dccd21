//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! main:
//!     Load .env → Resolve config → Init logging/metrics → Monitor::run_once → Exit
//!
//! Monitor::run_once (cycle.rs):
//!     Prober → HistoryStore (load, append, persist) → DashboardRenderer
//!     with the Alerter called inline for every DOWN target
//! ```
//!
//! # Design Decisions
//! - One invocation runs one cycle; recurring runs belong to an external scheduler
//! - Fail fast on config errors, before any probe is sent
//! - Exit code is non-zero only when an output write fails

pub mod cycle;

pub use cycle::{CycleReport, Monitor, MonitorError};
