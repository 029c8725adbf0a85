use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::{
    cli::types::TeamId,
    core::http::build_client,
    error::ScanError,
    onefootball::types::{TeamEnvelope, TeamRecord},
    scan::TeamSource,
    Result,
};


/// Default team endpoint. Team `n` lives at `{DEFAULT_BASE_URL}/n.json`.
pub const DEFAULT_BASE_URL: &str = "https://vintagemonster.onefootball.com/api/teams/en";

/// Team lookups against the OneFootball team endpoint.
#[derive(Debug, Clone)]
pub struct OneFootballClient {
    client: Client,
    base_url: String,
}

impl OneFootballClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::with_client(build_client(timeout)?, base_url)
    }

    /// Use an already configured client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|_| ScanError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    pub fn team_url(&self, id: TeamId) -> String {
        format!("{}/{}.json", self.base_url, id)
    }
}

#[async_trait]
impl TeamSource for OneFootballClient {
    async fn fetch_team(&self, id: TeamId) -> Result<TeamRecord> {
        let url = self.team_url(id);
        debug!(%url, "fetching team");

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ScanError::Transport { id, source })?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(ScanError::Status {
                id,
                status: status.as_u16(),
            });
        }

        let body = res
            .bytes()
            .await
            .map_err(|source| ScanError::Transport { id, source })?;

        let envelope: TeamEnvelope =
            serde_json::from_slice(&body).map_err(|source| ScanError::Decode { id, source })?;

        Ok(envelope.into_team())
    }
}
