//! Core utilities shared by the commands
//!
//! - `http`: reqwest client construction
//! - `logging`: tracing subscriber setup

pub mod http;
pub mod logging;

pub use http::build_client;
pub use logging::setup_tracing;
