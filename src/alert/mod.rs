//! Alerting subsystem.
//!
//! # Data Flow
//! ```text
//! Probe failure
//!     → Alerter::notify(message)
//!     → webhook.rs: WebhookAlerter::send → Result<bool, AlertError>
//!     → errors logged and dropped at the notify boundary
//! ```
//!
//! # Design Decisions
//! - Best effort: alerting never aborts the cycle
//! - No destination configured means alerting is off, not an error

use std::future::Future;

pub mod webhook;

pub use webhook::{AlertError, WebhookAlerter};

/// Sink for failure notifications.
///
/// Implementations must not fail: delivery problems are handled internally.
pub trait Alerter {
    fn notify(&self, message: &str) -> impl Future<Output = ()> + Send;
}
