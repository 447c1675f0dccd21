//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Configured targets (in order)
//!     → prober.rs (GET with timeout, one target at a time)
//!     → types.rs (ProbeResult: UP + latency, or DOWN)
//!     → on DOWN: alert::Alerter::notify
//! ```
//!
//! # Design Decisions
//! - Sequential probing; no overlap between targets
//! - Any failure (timeout, connect, non-2xx) is DOWN
//! - No retries; the next scheduled cycle is the retry

pub mod prober;
pub mod types;

pub use prober::Prober;
pub use types::{ProbeFailure, ProbeResult, Status, Target};
