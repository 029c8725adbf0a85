//! CLI argument definitions and parsing.

pub mod args;
pub mod types;

pub use args::{Commands, RosterScan, SourceArgs};
