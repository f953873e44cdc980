//! Fair match selection: which four players go on court next.

use crate::models::{Level, Player, PlayerId};
use thiserror::Error;

/// Players in one doubles match.
pub const MATCH_SIZE: usize = 4;

/// At most this many players of one level in a match.
pub const MAX_PER_LEVEL: usize = 2;

/// Why no match could be formed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SelectionError {
    /// Fewer than 4 eligible and available players. Wait for more players.
    #[error("Need at least 4 available players (have {available})")]
    InsufficientPlayers { available: usize },
    /// Enough players, but the level rules rule out every combination the walk tried.
    #[error("Cannot form a fair team with the available players")]
    CannotFormFairTeam,
}

/// Pick the next four players.
///
/// 1. Keep eligible players with status `Available`.
/// 2. Sort by `games_played` (ascending), then `name` (ascending, case-sensitive).
/// 3. Walk the list and admit each candidate unless its level already has
///    [`MAX_PER_LEVEL`] admitted, or it is an A while a D is admitted (or the reverse).
/// 4. Stop at four. Constraints are never relaxed.
///
/// Returns the players in admission order.
pub fn select_fair_match(players: &[Player]) -> Result<[Player; MATCH_SIZE], SelectionError> {
    let mut pool: Vec<&Player> = players.iter().filter(|p| p.is_available()).collect();
    if pool.len() < MATCH_SIZE {
        return Err(SelectionError::InsufficientPlayers {
            available: pool.len(),
        });
    }

    pool.sort_by(|a, b| {
        a.games_played
            .cmp(&b.games_played)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut per_level = [0usize; Level::ALL.len()];
    let mut admitted: Vec<Player> = Vec::with_capacity(MATCH_SIZE);
    for candidate in pool {
        if per_level[candidate.level.tier()] >= MAX_PER_LEVEL {
            log::debug!("Skipping {}: level {} is full", candidate.name, candidate.level);
            continue;
        }
        if admitted.iter().any(|p| p.level.excludes(candidate.level)) {
            log::debug!("Skipping {}: level {} cannot meet the other extreme", candidate.name, candidate.level);
            continue;
        }
        per_level[candidate.level.tier()] += 1;
        admitted.push(candidate.clone());
        if admitted.len() == MATCH_SIZE {
            break;
        }
    }

    admitted
        .try_into()
        .map_err(|_| SelectionError::CannotFormFairTeam)
}

/// Split a selected four into two sides: strongest and weakest against the two middle players.
///
/// Sorting is stable, so equal levels keep admission order.
pub fn balance_teams(players: &[Player; MATCH_SIZE]) -> ([PlayerId; 2], [PlayerId; 2]) {
    let mut by_level: Vec<&Player> = players.iter().collect();
    by_level.sort_by_key(|p| p.level);
    (
        [by_level[3].id, by_level[0].id],
        [by_level[2].id, by_level[1].id],
    )
}
