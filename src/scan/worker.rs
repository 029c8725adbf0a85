//! Looking up a single ID and the worker pool that does it concurrently.

use std::{ops::AddAssign, sync::Arc};

use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{cli::types::TeamId, error::ScanError};

use super::{aggregate::Aggregate, source::TeamSource, watchlist::WatchList};

/// Everything a lookup needs, shared by the coordinator and all workers.
pub struct ScanContext {
    pub source: Arc<dyn TeamSource>,
    pub watch_list: WatchList,
    pub aggregate: Aggregate,
}

impl ScanContext {
    pub fn new(source: Arc<dyn TeamSource>, watch_list: WatchList) -> Self {
        Self {
            source,
            watch_list,
            aggregate: Aggregate::new(),
        }
    }
}

/// Result of looking up one ID.
#[derive(Debug)]
pub enum Lookup {
    /// Watch-listed team, already merged into the aggregate
    Matched(String),
    /// Team exists but is not on the watch-list
    Unmatched(String),
    Failed(ScanError),
}

/// Sent by a worker for every merged watch-list team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: TeamId,
    pub team: String,
}

/// Per-worker lookup counters; summed into the scan summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub checked: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub failed: usize,
    /// Highest ID checked so far
    pub last_checked: Option<TeamId>,
}

impl WorkerStats {
    pub fn record(&mut self, id: TeamId, lookup: &Lookup) {
        self.checked += 1;
        self.last_checked = self.last_checked.max(Some(id));
        match lookup {
            Lookup::Matched(_) => self.matched += 1,
            Lookup::Unmatched(_) => self.unmatched += 1,
            Lookup::Failed(_) => self.failed += 1,
        }
    }
}

impl AddAssign for WorkerStats {
    fn add_assign(&mut self, rhs: Self) {
        self.checked += rhs.checked;
        self.matched += rhs.matched;
        self.unmatched += rhs.unmatched;
        self.failed += rhs.failed;
        self.last_checked = self.last_checked.max(rhs.last_checked);
    }
}

/// Fetch one ID, and merge it when the team is watch-listed.
///
/// Failures stay local to the ID: they are logged and returned, never retried.
pub async fn lookup(ctx: &ScanContext, id: TeamId) -> Lookup {
    match ctx.source.fetch_team(id).await {
        Ok(team) if ctx.watch_list.matches(&team.name) => {
            ctx.aggregate.merge_team(&team);
            info!("{} found on id {}", team.name, id);
            Lookup::Matched(team.name)
        }
        Ok(team) => {
            debug!(%id, team = %team.name, "team not on watch-list");
            Lookup::Unmatched(team.name)
        }
        Err(err) => {
            if err.is_not_found() {
                debug!(%id, "{err}");
            } else {
                warn!(%id, "{err}");
            }
            Lookup::Failed(err)
        }
    }
}

/// Spawn a worker that drains `queue` until it is closed.
///
/// Each match is reported on `completions`; misses and failures are only
/// counted in the returned stats.
pub fn spawn_worker(
    worker_id: usize,
    ctx: Arc<ScanContext>,
    queue: Arc<Mutex<mpsc::Receiver<TeamId>>>,
    completions: mpsc::Sender<Completion>,
) -> JoinHandle<WorkerStats> {
    tokio::spawn(async move {
        debug!(worker_id, "worker started");
        let mut stats = WorkerStats::default();

        loop {
            let id = {
                let mut rx = queue.lock().await;
                rx.recv().await
            };

            let Some(id) = id else {
                break;
            };

            let lookup = lookup(&ctx, id).await;
            stats.record(id, &lookup);

            if let Lookup::Matched(team) = lookup {
                if completions.send(Completion { id, team }).await.is_err() {
                    warn!(worker_id, %id, "completion receiver dropped");
                }
            }
        }

        debug!(worker_id, ?stats, "worker finished");
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        onefootball::types::{PlayerRecord, TeamRecord},
        scan::replay::ReplaySource,
    };

    fn team(id: u32, name: &str, players: &[&str]) -> TeamRecord {
        TeamRecord {
            id: TeamId::new(id),
            name: name.to_string(),
            players: players
                .iter()
                .map(|p| PlayerRecord {
                    name: p.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn context(source: ReplaySource, teams: &[&str]) -> ScanContext {
        ScanContext::new(Arc::new(source), WatchList::new(teams.iter().copied()).unwrap())
    }

    #[tokio::test]
    async fn test_lookup_match_merges() {
        let ctx = context(ReplaySource::new().with_team(team(1, "A", &["P1"])), &["A"]);

        let result = lookup(&ctx, TeamId::new(1)).await;
        assert!(matches!(result, Lookup::Matched(ref name) if name == "A"));
        assert_eq!(ctx.aggregate.get("P1").unwrap().teams, vec!["A"]);
    }

    #[tokio::test]
    async fn test_lookup_unmatched_is_dropped() {
        let ctx = context(ReplaySource::new().with_team(team(1, "Z", &["P1"])), &["A"]);

        let result = lookup(&ctx, TeamId::new(1)).await;
        assert!(matches!(result, Lookup::Unmatched(_)));
        assert!(ctx.aggregate.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_local() {
        let ctx = context(ReplaySource::new().with_status(TeamId::new(2), 500), &["A"]);

        let result = lookup(&ctx, TeamId::new(2)).await;
        assert!(matches!(
            result,
            Lookup::Failed(ScanError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_worker_stats_record_and_sum() {
        let mut a = WorkerStats::default();
        a.record(TeamId::new(1), &Lookup::Matched("A".into()));
        a.record(TeamId::new(7), &Lookup::Unmatched("Z".into()));

        let mut b = WorkerStats::default();
        b.record(TeamId::new(3), &Lookup::Failed(ScanError::Status {
            id: TeamId::new(3),
            status: 404,
        }));

        a += b;
        assert_eq!(
            a,
            WorkerStats {
                checked: 3,
                matched: 1,
                unmatched: 1,
                failed: 1,
                last_checked: Some(TeamId::new(7)),
            }
        );
    }

    #[tokio::test]
    async fn test_worker_drains_queue_and_reports_matches() {
        let source = ReplaySource::new()
            .with_team(team(1, "A", &["P1"]))
            .with_team(team(2, "Z", &["P9"]));
        let ctx = Arc::new(context(source, &["A"]));

        let (id_tx, id_rx) = mpsc::channel(4);
        let (done_tx, mut done_rx) = mpsc::channel(4);
        for id in 1..=3 {
            id_tx.send(TeamId::new(id)).await.unwrap();
        }
        drop(id_tx);

        let handle = spawn_worker(0, ctx.clone(), Arc::new(Mutex::new(id_rx)), done_tx);
        let stats = handle.await.unwrap();

        assert_eq!(stats.checked, 3);
        assert_eq!(stats.matched, 1);
        assert_eq!(stats.unmatched, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.last_checked, Some(TeamId::new(3)));

        assert_eq!(
            done_rx.recv().await,
            Some(Completion {
                id: TeamId::new(1),
                team: "A".to_string(),
            })
        );
        assert_eq!(done_rx.recv().await, None);
    }
}
