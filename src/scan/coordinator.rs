//! Scan coordination: walks the ID space in one of two modes and decides when
//! the scan is finished.
//!
//! ## Modes
//!
//! - [`ScanMode::EarlyStop`] checks IDs one at a time on the calling task and
//!   stops as soon as every watch-list team has been found. No lookup is
//!   issued past the ID that completed the set.
//! - [`ScanMode::FanOut`] queues the whole range `[1, max_id]` up front and
//!   lets a pool of workers drain it. The full range is always checked; the
//!   coordinator counts completion signals against the watch-list size.
//!
//! Both modes end in [`ScanState::Done`] only after every lookup has finished,
//! so the returned players are never a partial merge.

use std::{collections::HashSet, sync::Arc};

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use crate::{
    cli::types::{MaxId, TeamId, WorkerCount},
    onefootball::types::PlayerRecord,
    Result,
};

use super::{
    source::TeamSource,
    watchlist::WatchList,
    worker::{lookup, spawn_worker, Lookup, ScanContext, WorkerStats},
};


/// How IDs are dispatched and when the scan stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    EarlyStop,
    FanOut { workers: WorkerCount },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    Draining,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub mode: ScanMode,
    pub max_id: MaxId,
}

/// Distinct watch-list teams found so far.
///
/// Only the coordinator updates this, from outcomes reported by lookups.
#[derive(Debug, Clone, Default)]
pub struct ScanProgress {
    found: HashSet<String>,
    expected: usize,
}

impl ScanProgress {
    pub fn new(expected: usize) -> Self {
        Self {
            found: HashSet::new(),
            expected,
        }
    }

    /// Returns true the first time `team` is recorded.
    pub fn record(&mut self, team: &str) -> bool {
        self.found.insert(team.to_string())
    }

    pub fn found(&self) -> usize {
        self.found.len()
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() >= self.expected
    }

    /// Found team names, sorted.
    pub fn teams(&self) -> Vec<String> {
        let mut teams: Vec<String> = self.found.iter().cloned().collect();
        teams.sort();
        teams
    }
}

/// Counters and termination details for a finished scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub stats: WorkerStats,
    pub teams_found: Vec<String>,
    pub expected: usize,
    /// Early-stop only: the ID whose team completed the watch-list.
    pub stopped_at: Option<TeamId>,
}

impl ScanSummary {
    pub fn is_complete(&self) -> bool {
        self.teams_found.len() >= self.expected
    }
}

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Aggregated players, unsorted.
    pub players: Vec<PlayerRecord>,
    pub summary: ScanSummary,
}

pub struct Coordinator {
    ctx: Arc<ScanContext>,
    config: ScanConfig,
    state: ScanState,
    progress: ScanProgress,
}

impl Coordinator {
    pub fn new(source: Arc<dyn TeamSource>, watch_list: WatchList, config: ScanConfig) -> Self {
        let progress = ScanProgress::new(watch_list.len());
        Self {
            ctx: Arc::new(ScanContext::new(source, watch_list)),
            config,
            state: ScanState::Scanning,
            progress,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Run the scan to completion and hand back the merged roster.
    ///
    /// Per-ID failures never surface here; an error means a worker task died.
    pub async fn run(mut self) -> Result<ScanOutcome> {
        info!(
            mode = ?self.config.mode,
            max_id = %self.config.max_id,
            teams = self.progress.expected(),
            "starting scan"
        );

        let mode = self.config.mode;
        let (stats, stopped_at) = match mode {
            ScanMode::EarlyStop => self.run_early_stop().await,
            ScanMode::FanOut { workers } => (self.run_fan_out(workers).await?, None),
        };
        self.transition(ScanState::Done);

        let summary = ScanSummary {
            stats,
            teams_found: self.progress.teams(),
            expected: self.progress.expected(),
            stopped_at,
        };

        if summary.is_complete() {
            info!("scan finished, all watch-list teams found");
        } else {
            info!(
                found = summary.teams_found.len(),
                expected = summary.expected,
                "ID range exhausted before every watch-list team was found"
            );
        }

        Ok(ScanOutcome {
            players: self.ctx.aggregate.snapshot(),
            summary,
        })
    }

    async fn run_early_stop(&mut self) -> (WorkerStats, Option<TeamId>) {
        let mut stats = WorkerStats::default();
        let mut stopped_at = None;

        for id in self.config.max_id.ids() {
            let lookup = lookup(&self.ctx, id).await;
            stats.record(id, &lookup);

            if let Lookup::Matched(team) = &lookup {
                self.progress.record(team);
                if self.progress.is_complete() {
                    info!("All data found {}", id);
                    stopped_at = Some(id);
                    break;
                }
            }
        }

        self.transition(ScanState::Draining);
        (stats, stopped_at)
    }

    async fn run_fan_out(&mut self, workers: WorkerCount) -> Result<WorkerStats> {
        // Sized to the whole range so submission never waits on the workers
        let (id_tx, id_rx) = mpsc::channel(self.config.max_id.as_u32() as usize);
        let queue = Arc::new(Mutex::new(id_rx));
        let (done_tx, mut done_rx) = mpsc::channel(self.progress.expected().max(1));

        let handles: Vec<_> = (0..workers.get())
            .map(|worker_id| {
                spawn_worker(worker_id, self.ctx.clone(), queue.clone(), done_tx.clone())
            })
            .collect();
        drop(done_tx);

        for id in self.config.max_id.ids() {
            if id_tx.send(id).await.is_err() {
                break;
            }
        }
        drop(id_tx);
        self.transition(ScanState::Draining);

        // Drain until every worker has hung up, including signals past the
        // expected count, so no worker blocks on a full channel.
        while let Some(completion) = done_rx.recv().await {
            debug!(id = %completion.id, team = %completion.team, "completion received");
            if self.progress.record(&completion.team) && self.progress.is_complete() {
                info!(
                    "All {} watch-list teams found, draining remaining IDs",
                    self.progress.expected()
                );
            }
        }

        let mut stats = WorkerStats::default();
        for handle in handles {
            stats += handle.await?;
        }
        Ok(stats)
    }

    fn transition(&mut self, next: ScanState) {
        debug!(from = ?self.state, to = ?next, "scan state");
        self.state = next;
    }
}
