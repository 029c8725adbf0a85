//! Type-safe wrappers and enums for scan configuration.

pub mod ids;
pub mod mode;

pub use ids::{MaxId, TeamId, WorkerCount};
pub use mode::ModeArg;
