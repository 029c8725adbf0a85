//! Team Roster Scanner Library
//!
//! Walks a dense numeric team ID space on a remote API, keeps the teams whose
//! names are on a watch-list, and merges every player seen on those teams into
//! one roster with each player's team memberships.
//!
//! ## Features
//!
//! - **Early-stop scanning**: sequential lookups that halts once every
//!   watch-list team has been found
//! - **Fan-out scanning**: a fixed worker pool checking the whole ID range
//! - **Lossless aggregation**: one lock-guarded roster shared by all workers
//! - **Collated report**: players sorted by English collation rules
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use roster_scan::{
//!     commands::scan::run_scan, onefootball::OneFootballClient, MaxId, ScanConfig, ScanMode,
//!     WatchList,
//! };
//!
//! # async fn example() -> roster_scan::Result<()> {
//! let source = OneFootballClient::new(
//!     roster_scan::onefootball::DEFAULT_BASE_URL,
//!     Duration::from_secs(10),
//! )?;
//! let config = ScanConfig {
//!     mode: ScanMode::EarlyStop,
//!     max_id: MaxId::new(100).unwrap(),
//! };
//!
//! let report = run_scan(Arc::new(source), WatchList::default(), config).await?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ROSTER_SCAN_MAX_ID=100
//! export ROSTER_SCAN_WORKERS=8
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod onefootball;
pub mod report;
pub mod scan;

// Re-export commonly used types
pub use cli::types::{MaxId, TeamId, WorkerCount};
pub use error::{Result, ScanError};
pub use onefootball::{PlayerRecord, TeamRecord};
pub use scan::{Coordinator, ScanConfig, ScanMode, ScanOutcome, TeamSource, WatchList};

pub const MAX_ID_ENV_VAR: &str = "ROSTER_SCAN_MAX_ID";
pub const WORKERS_ENV_VAR: &str = "ROSTER_SCAN_WORKERS";
