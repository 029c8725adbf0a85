//! Scan command implementation

use std::{sync::Arc, time::Duration};

use tracing::info;

use crate::{
    cli::types::{MaxId, ModeArg, WorkerCount},
    onefootball::OneFootballClient,
    report::build_report,
    scan::{Coordinator, ScanConfig, TeamSource, WatchList},
    Result,
};

use super::{resolve_scan_config, resolve_watch_list};

/// Parameters for the scan command
#[derive(Debug)]
pub struct ScanParams {
    pub mode: ModeArg,
    pub max_id: Option<MaxId>,
    pub workers: Option<WorkerCount>,
    pub teams: Option<Vec<String>>,
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Handle the scan command
pub async fn handle_scan(params: ScanParams) -> Result<()> {
    // Configuration problems abort before any request is made
    let config = resolve_scan_config(params.mode, params.max_id, params.workers)?;
    let watch_list = resolve_watch_list(params.teams)?;
    let source = OneFootballClient::new(
        &params.base_url,
        Duration::from_secs(params.timeout_secs),
    )?;

    let report = run_scan(Arc::new(source), watch_list, config).await?;
    print!("{report}"); // tarpaulin::skip - console output

    Ok(())
}

/// Scan `source` and return the rendered report.
pub async fn run_scan(
    source: Arc<dyn TeamSource>,
    watch_list: WatchList,
    config: ScanConfig,
) -> Result<String> {
    let outcome = Coordinator::new(source, watch_list, config).run().await?;

    info!(
        checked = outcome.summary.stats.checked,
        matched = outcome.summary.stats.matched,
        unmatched = outcome.summary.stats.unmatched,
        failed = outcome.summary.stats.failed,
        last_checked = ?outcome.summary.stats.last_checked,
        players = outcome.players.len(),
        "scan summary"
    );

    build_report(outcome.players)
}
