//! In-memory team source that replays a fixed set of fetch outcomes.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    cli::types::TeamId, error::ScanError, onefootball::types::TeamRecord, Result,
};

use super::source::TeamSource;

/// Serves recorded teams by ID and answers every other ID with a 404.
///
/// Every requested ID is remembered in order, so a run can be checked for
/// exactly which lookups it issued.
#[derive(Debug, Default)]
pub struct ReplaySource {
    teams: HashMap<TeamId, TeamRecord>,
    statuses: HashMap<TeamId, u16>,
    requested: Mutex<Vec<TeamId>>,
}

impl ReplaySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `team` under its own ID.
    pub fn with_team(self, team: TeamRecord) -> Self {
        let id = team.id;
        self.with_team_at(id, team)
    }

    /// Serve `team` under `id`, whatever the record's own ID says.
    pub fn with_team_at(mut self, id: TeamId, team: TeamRecord) -> Self {
        self.statuses.remove(&id);
        self.teams.insert(id, team);
        self
    }

    /// Answer `id` with a non-success status.
    pub fn with_status(mut self, id: TeamId, status: u16) -> Self {
        self.teams.remove(&id);
        self.statuses.insert(id, status);
        self
    }

    /// IDs requested so far, in request order.
    pub fn requested(&self) -> Vec<TeamId> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl TeamSource for ReplaySource {
    async fn fetch_team(&self, id: TeamId) -> Result<TeamRecord> {
        self.requested.lock().push(id);
        // Let other workers interleave the way real lookups would
        tokio::task::yield_now().await;

        if let Some(team) = self.teams.get(&id) {
            return Ok(team.clone());
        }

        let status = self.statuses.get(&id).copied().unwrap_or(404);
        Err(ScanError::Status { id, status })
    }
}
