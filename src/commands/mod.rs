//! Command implementations for the roster scanner

pub mod scan;
pub mod team;

use crate::{
    cli::types::{MaxId, ModeArg, WorkerCount},
    error::ScanError,
    scan::{ScanConfig, ScanMode, WatchList},
    Result, MAX_ID_ENV_VAR, WORKERS_ENV_VAR,
};

#[cfg(test)]
mod tests;

/// Resolve the ID upper bound from option or environment variable.
///
/// A set but malformed environment value is an error, not a fallback.
pub fn resolve_max_id(max_id: Option<MaxId>) -> Result<MaxId> {
    match max_id {
        Some(max_id) => Ok(max_id),
        None => std::env::var(MAX_ID_ENV_VAR)
            .map_err(|_| ScanError::MissingMaxId {
                env_var: MAX_ID_ENV_VAR.to_string(),
            })?
            .parse(),
    }
}

/// Resolve the fan-out worker count from option or environment variable.
pub fn resolve_workers(workers: Option<WorkerCount>) -> Result<WorkerCount> {
    match workers {
        Some(workers) => Ok(workers),
        None => std::env::var(WORKERS_ENV_VAR)
            .map_err(|_| ScanError::MissingWorkers {
                env_var: WORKERS_ENV_VAR.to_string(),
            })?
            .parse(),
    }
}

/// Turn CLI options into a validated scan configuration.
///
/// The worker count is only consulted in fan-out mode.
pub fn resolve_scan_config(
    mode: ModeArg,
    max_id: Option<MaxId>,
    workers: Option<WorkerCount>,
) -> Result<ScanConfig> {
    let max_id = resolve_max_id(max_id)?;
    let mode = match mode {
        ModeArg::EarlyStop => ScanMode::EarlyStop,
        ModeArg::FanOut => ScanMode::FanOut {
            workers: resolve_workers(workers)?,
        },
    };
    Ok(ScanConfig { mode, max_id })
}

/// The built-in watch-list, or the given team names when present.
pub fn resolve_watch_list(teams: Option<Vec<String>>) -> Result<WatchList> {
    match teams {
        Some(teams) => WatchList::new(teams),
        None => Ok(WatchList::default()),
    }
}
