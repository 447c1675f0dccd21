//! Dashboard subsystem.
//!
//! # Data Flow
//! ```text
//! History (with current round) + targets
//!     → view.rs (labels, latency series, status rows)
//!     + host.rs (memory / uptime snapshot at render time)
//!     → render.rs (askama template → HTML file)
//! ```
//!
//! # Design Decisions
//! - View building is pure and testable without touching the filesystem
//! - The written document is self-contained apart from the chart script
//! - Write failures are fatal to the cycle

pub mod host;
pub mod render;
pub mod view;

pub use host::HostMetrics;
pub use render::{DashboardRenderer, RenderError};
pub use view::{ChartData, DashboardView, LatencySeries, StatusRow};
