//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use roster_scan::{
    cli::{Commands, RosterScan},
    commands::{
        scan::{handle_scan, ScanParams},
        team::handle_team,
    },
    core::setup_tracing,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = RosterScan::parse();

    match app.command {
        Commands::Scan {
            source,
            mode,
            max_id,
            workers,
            teams,
        } => {
            setup_tracing(source.verbose).context("failed to install log subscriber")?;
            handle_scan(ScanParams {
                mode,
                max_id,
                workers,
                teams,
                base_url: source.base_url,
                timeout_secs: source.timeout_secs,
            })
            .await
            .context("scan failed")?
        }

        Commands::Team { source, id } => {
            setup_tracing(source.verbose).context("failed to install log subscriber")?;
            handle_team(id, &source.base_url, source.timeout_secs)
                .await
                .with_context(|| format!("lookup of team {id} failed"))?
        }
    }

    Ok(())
}
