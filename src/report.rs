//! Final roster report: English collation and numbered rendering.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::{error::ScanError, onefootball::types::PlayerRecord, Result};

/// Collator following English sorting rules.
pub fn english_collator() -> Result<Collator> {
    Collator::try_new(&locale!("en").into(), CollatorOptions::new()).map_err(|err| {
        ScanError::Collation {
            message: err.to_string(),
        }
    })
}

/// Sort players by key the way an English reader expects: accents and case
/// are secondary to the base letters.
pub fn sort_players(mut players: Vec<PlayerRecord>) -> Result<Vec<PlayerRecord>> {
    let collator = english_collator()?;
    players.sort_by(|a, b| collator.compare(a.key(), b.key()));
    Ok(players)
}

/// Render already sorted players: the player count, then one numbered
/// `"<n>. <name>; <age>; <team1, team2>"` line per player.
pub fn render_report(players: &[PlayerRecord]) -> String {
    let mut lines = vec![players.len().to_string()];
    lines.extend(players.iter().enumerate().map(|(i, player)| {
        format!(
            "{}. {}; {}; {}",
            i + 1,
            player.name,
            player.age,
            player.teams.join(", ")
        )
    }));
    lines.join("\n") + "\n"
}

/// Sort and render in one step.
pub fn build_report(players: Vec<PlayerRecord>) -> Result<String> {
    Ok(render_report(&sort_players(players)?))
}
