//! The fixed set of team names a scan is looking for.

use std::collections::HashSet;

use crate::{error::ScanError, Result};

/// Teams scanned for when no `--team` is given.
pub const DEFAULT_TEAMS: [&str; 10] = [
    "Germany",
    "England",
    "France",
    "Spain",
    "Manchester United",
    "Arsenal",
    "Chelsea",
    "Barcelona",
    "Real Madrid",
    "Bayern Munich",
];

/// Read-only set of team names, matched exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchList {
    names: HashSet<String>,
}

impl WatchList {
    /// Build a watch-list from names. Duplicates collapse; an empty list is an error.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: HashSet<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ScanError::EmptyWatchList);
        }
        Ok(Self { names })
    }

    pub fn matches(&self, team_name: &str) -> bool {
        self.names.contains(team_name)
    }

    /// Number of distinct teams; a scan is complete once this many are found.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for WatchList {
    fn default() -> Self {
        Self {
            names: DEFAULT_TEAMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
