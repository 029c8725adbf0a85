//! Tracing setup for the CLI

use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "roster_scan=debug,warn"
    } else {
        "roster_scan=info,warn"
    }
}

/// Install a stderr subscriber so stdout carries only the report.
///
/// `RUST_LOG` overrides the verbosity flag when set. Fails if a global
/// subscriber is already installed.
pub fn setup_tracing(verbose: bool) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
}
