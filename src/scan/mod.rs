//! The identifier-scan engine.
//!
//! - `source`: the fetch seam ([`TeamSource`])
//! - `watchlist`: team names a scan is looking for
//! - `aggregate`: the shared, lock-guarded player roster
//! - `worker`: single-ID lookups and the worker pool
//! - `coordinator`: dispatch modes and termination
//! - `replay`: an in-memory source serving recorded outcomes (tests and the
//!   `test-utils` feature only)

pub mod aggregate;
pub mod coordinator;
#[cfg(any(test, feature = "test-utils"))]
pub mod replay;
pub mod source;
pub mod watchlist;
pub mod worker;

pub use aggregate::Aggregate;
pub use coordinator::{
    Coordinator, ScanConfig, ScanMode, ScanOutcome, ScanProgress, ScanState, ScanSummary,
};
#[cfg(any(test, feature = "test-utils"))]
pub use replay::ReplaySource;
pub use source::TeamSource;
pub use watchlist::{WatchList, DEFAULT_TEAMS};
pub use worker::{Completion, Lookup, WorkerStats};
