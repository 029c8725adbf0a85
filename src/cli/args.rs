//! CLI argument definitions and parsing structures.

use super::types::{ids::MaxId, ids::TeamId, ids::WorkerCount, mode::ModeArg};
use crate::onefootball::http::DEFAULT_BASE_URL;
use clap::{Args, Parser, Subcommand};

/// Data source arguments shared between commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Base URL of the team endpoint; `/<id>.json` is appended per request.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Log per-ID failures and worker activity.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "roster-scan",
    about = "Scan a team ID space and report the players of watch-listed teams"
)]
pub struct RosterScan {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan IDs 1..=max-id, match teams against the watch-list and print the
    /// merged player roster.
    Scan {
        #[clap(flatten)]
        source: SourceArgs,

        /// Scan strategy.
        #[clap(long, value_enum, default_value_t = ModeArg::default())]
        mode: ModeArg,

        /// Highest team ID to check (or set `ROSTER_SCAN_MAX_ID`).
        #[clap(long)]
        max_id: Option<MaxId>,

        /// Worker pool size for fan-out mode (or set `ROSTER_SCAN_WORKERS`).
        #[clap(long, short)]
        workers: Option<WorkerCount>,

        /// Watch-list team name (repeatable): `-t Arsenal -t Chelsea`.
        /// Replaces the built-in watch-list when given.
        #[clap(long = "team", short = 't')]
        teams: Option<Vec<String>>,
    },

    /// Fetch a single team by ID and print its players.
    Team {
        #[clap(flatten)]
        source: SourceArgs,

        /// Team ID to look up.
        #[clap(long)]
        id: TeamId,
    },
}
