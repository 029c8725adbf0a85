//! Player roster aggregated across every matched team.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::onefootball::types::{PlayerRecord, TeamRecord};

/// Shared map from player key to the latest record for that player.
///
/// All mutation goes through [`Aggregate::merge_team`], which holds a single
/// lock for the whole team so concurrent merges never lose a membership entry.
#[derive(Debug, Default)]
pub struct Aggregate {
    players: Mutex<HashMap<String, PlayerRecord>>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every player of `team`, appending the team name to each
    /// player's membership list.
    ///
    /// Fields other than the membership list take the values of this
    /// observation. Merging the same team twice appends its name twice.
    pub fn merge_team(&self, team: &TeamRecord) {
        let mut players = self.players.lock();
        for player in &team.players {
            let mut teams = players
                .remove(player.key())
                .map(|prior| prior.teams)
                .unwrap_or_default();
            teams.push(team.name.clone());

            players.insert(
                player.key().to_string(),
                PlayerRecord {
                    teams,
                    ..player.clone()
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.players.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.lock().is_empty()
    }

    pub fn get(&self, key: &str) -> Option<PlayerRecord> {
        self.players.lock().get(key).cloned()
    }

    /// Copy of every aggregated player, in no particular order.
    pub fn snapshot(&self) -> Vec<PlayerRecord> {
        self.players.lock().values().cloned().collect()
    }
}
