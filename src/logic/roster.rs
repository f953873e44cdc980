//! Roster import from CSV: `name,level[,games_played]` with a header row.

use crate::models::{Level, LevelError, Player};
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Could not read roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: player name is empty")]
    EmptyName { line: usize },
    #[error("Line {line}: {source}")]
    Level { line: usize, source: LevelError },
}

#[derive(Deserialize)]
struct RosterRow {
    name: String,
    level: String,
    #[serde(default)]
    games_played: Option<u32>,
}

/// Parse a roster. Every row becomes a new eligible, available player.
pub fn import_roster_csv<R: Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut players = Vec::new();
    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = row?;
        if row.name.is_empty() {
            return Err(RosterError::EmptyName { line });
        }
        let level: Level = row
            .level
            .parse()
            .map_err(|source| RosterError::Level { line, source })?;
        players.push(Player::new(row.name, level).with_games_played(row.games_played.unwrap_or(0)));
    }
    log::debug!("Parsed {} roster rows", players.len());
    Ok(players)
}
