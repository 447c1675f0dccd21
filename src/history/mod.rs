//! History subsystem.
//!
//! # Data Flow
//! ```text
//! history.json
//!     → store.rs load() (missing/corrupt → empty)
//!     → round.rs History::append (FIFO eviction beyond capacity)
//!     → store.rs persist() (full rewrite, append order)
//! ```
//!
//! # Design Decisions
//! - Load failures are soft; write failures propagate
//! - Single writer assumed; no file locking

pub mod round;
pub mod store;

pub use round::{History, Round, TIMESTAMP_FORMAT};
pub use store::{HistoryError, HistoryStore};
