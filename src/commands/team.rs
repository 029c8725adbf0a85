//! Single team lookup command implementation

use std::time::Duration;

use crate::{
    cli::types::TeamId,
    onefootball::{OneFootballClient, TeamRecord},
    report::sort_players,
    scan::TeamSource,
    Result,
};

/// Handle the team command: fetch one ID and print what it holds.
pub async fn handle_team(id: TeamId, base_url: &str, timeout_secs: u64) -> Result<()> {
    let source = OneFootballClient::new(base_url, Duration::from_secs(timeout_secs))?;
    let team = source.fetch_team(id).await?;
    print!("{}", render_team(team)?); // tarpaulin::skip - console output
    Ok(())
}

/// Team header followed by its players in collated order.
pub fn render_team(team: TeamRecord) -> Result<String> {
    let mut lines = vec![format!(
        "{} (id {}), {} players",
        team.name,
        team.id,
        team.players.len()
    )];

    for (i, player) in sort_players(team.players)?.iter().enumerate() {
        lines.push(format!(
            "{}. {}; {}; #{}; {}; {}",
            i + 1,
            player.name,
            player.position,
            player.number,
            player.age,
            player.country
        ));
    }

    Ok(lines.join("\n") + "\n")
}
