//! OneFootball team endpoint: wire types and the HTTP team source.

pub mod http;
pub mod types;

pub use http::{OneFootballClient, DEFAULT_BASE_URL};
pub use types::{PlayerRecord, TeamEnvelope, TeamRecord};
