//! Numeric identifier and sizing types for the scanner.

use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for team identifiers in the data source's ID space.
///
/// # Examples
///
/// ```rust
/// use roster_scan::TeamId;
///
/// let id = TeamId::new(42);
/// assert_eq!(id.as_u32(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| ScanError::InvalidTeamId {
                value: s.to_string(),
            })
    }
}

/// Inclusive upper bound of the ID space `[1, max]`.
///
/// Always positive: zero and non-numeric input are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxId(u32);

impl MaxId {
    /// Returns `None` for zero.
    pub fn new(max: u32) -> Option<Self> {
        (max > 0).then_some(Self(max))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Every ID in `[1, max]`, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = TeamId> {
        (1..=self.0).map(TeamId)
    }
}

impl fmt::Display for MaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaxId {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ScanError::InvalidMaxId {
                value: s.to_string(),
            })
    }
}

/// Number of concurrent workers in fan-out mode. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerCount(usize);

impl WorkerCount {
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self(count))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkerCount {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ScanError::InvalidWorkers {
                value: s.to_string(),
            })
    }
}
