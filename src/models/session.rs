//! Session: one club night with its roster snapshot and match queue.

use crate::logic::SelectionError;
use crate::models::game::{GameMatch, MatchId, MatchState};
use crate::models::player::{Level, Player, PlayerId, PlayerStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during session operations.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("Player name must not be empty")]
    EmptyPlayerName,
    /// Names are unique, case-insensitive.
    #[error("A player with this name already exists")]
    DuplicatePlayerName,
    #[error("Player not found")]
    PlayerNotFound(PlayerId),
    #[error("Player is queued or on court")]
    PlayerBusy(PlayerId),
    #[error("Match not found")]
    MatchNotFound(MatchId),
    #[error("Match is {actual:?}, expected {expected:?}")]
    InvalidMatchState { expected: MatchState, actual: MatchState },
}

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Roster and matches for one session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub players: Vec<Player>,
    /// Every match of the session, oldest first.
    pub matches: Vec<GameMatch>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
            matches: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a session with an initial roster.
    pub fn with_players(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::new(name)
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Players that can be picked right now.
    pub fn available_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_available())
    }

    /// Queued and in-progress matches.
    pub fn open_matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(|m| m.is_open())
    }

    fn has_player_named(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Add a player by name and level. Returns the new player's id.
    pub fn add_player(&mut self, name: impl Into<String>, level: Level) -> Result<PlayerId, SessionError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }
        if self.has_player_named(name) {
            return Err(SessionError::DuplicatePlayerName);
        }
        let player = Player::new(name, level);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Append imported players, skipping names already on the roster. Returns how many were added.
    pub fn import_players(&mut self, players: Vec<Player>) -> usize {
        let mut added = 0;
        for p in players {
            if p.name.trim().is_empty() || self.has_player_named(&p.name) {
                log::debug!("Skipping imported player '{}'", p.name);
                continue;
            }
            self.players.push(p);
            added += 1;
        }
        added
    }

    /// Remove a player who is not queued or on court.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::PlayerNotFound(id))?;
        if self.players[idx].status != PlayerStatus::Available {
            return Err(SessionError::PlayerBusy(id));
        }
        self.players.remove(idx);
        Ok(())
    }

    /// Pause or resume a player. Takes effect from the next selection.
    pub fn set_eligible(&mut self, id: PlayerId, eligible: bool) -> Result<(), SessionError> {
        self.get_player_mut(id)
            .ok_or(SessionError::PlayerNotFound(id))?
            .eligible = eligible;
        Ok(())
    }

    pub fn set_level(&mut self, id: PlayerId, level: Level) -> Result<(), SessionError> {
        self.get_player_mut(id)
            .ok_or(SessionError::PlayerNotFound(id))?
            .level = level;
        Ok(())
    }
}
