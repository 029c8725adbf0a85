use crate::cli::types::TeamId;
use serde::{Deserialize, Deserializer, Serialize};


/// Treat an explicit JSON `null` like a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level envelope of a team response: `{ "data": { "team": { .. } } }`
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEnvelope {
    pub data: TeamData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamData {
    pub team: TeamRecord,
}

impl TeamEnvelope {
    pub fn into_team(self) -> TeamRecord {
        self.data.team
    }
}

/// One team as returned by the data source
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamRecord {
    #[serde(default, deserialize_with = "de_null_default")]
    pub id: TeamId,
    /// Join key against the watch-list
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerRecord>,
}

/// Player entry inside a team response.
///
/// Missing and `null` fields fall back to their defaults; a field with the
/// wrong JSON type fails the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(deserialize_with = "de_null_default")]
    pub id: String,
    #[serde(deserialize_with = "de_null_default")]
    pub country: String,
    #[serde(deserialize_with = "de_null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "de_null_default")]
    pub last_name: String,
    #[serde(deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(deserialize_with = "de_null_default")]
    pub position: String,
    #[serde(deserialize_with = "de_null_default")]
    pub number: i64,
    /// Display age, kept as the source renders it
    #[serde(deserialize_with = "de_null_default")]
    pub age: String,
    #[serde(deserialize_with = "de_null_default")]
    pub birth_date: String,
    #[serde(deserialize_with = "de_null_default")]
    pub height: i64,
    #[serde(deserialize_with = "de_null_default")]
    pub weight: i64,
    #[serde(deserialize_with = "de_null_default")]
    pub thumbnail_src: String,
    /// Watch-list teams this player was seen on, in merge order.
    /// Never part of the wire format.
    #[serde(skip)]
    pub teams: Vec<String>,
}

impl PlayerRecord {
    /// Aggregation key. Players sharing a name share an entry.
    pub fn key(&self) -> &str {
        &self.name
    }
}
