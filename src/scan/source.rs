//! The fetch seam between the scan engine and a team data source.

use async_trait::async_trait;

use crate::{cli::types::TeamId, onefootball::types::TeamRecord, Result};

/// Anything that can resolve a team ID to a team record.
///
/// Implementations perform exactly one lookup per call and never retry. A
/// failure is final for that ID within a scan and must be one of the per-ID
/// error variants (see [`crate::ScanError::is_per_id`]).
#[async_trait]
pub trait TeamSource: Send + Sync {
    async fn fetch_team(&self, id: TeamId) -> Result<TeamRecord>;
}
