//! Scan mode selection for the CLI.

use std::fmt;

/// How the identifier space is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModeArg {
    /// Check IDs one at a time and stop once every watch-list team is found
    #[default]
    EarlyStop,
    /// Check the whole range concurrently with a worker pool
    FanOut,
}

impl fmt::Display for ModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModeArg::EarlyStop => "early-stop",
            ModeArg::FanOut => "fan-out",
        };
        write!(f, "{}", s)
    }
}
