//! Player, skill levels and queue status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// Errors from parsing or converting skill levels.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LevelError {
    #[error("Unknown level '{0}' (expected A, B, C or D)")]
    UnknownLevel(String),
    #[error("Sub level {0} out of range (expected 1 to 3)")]
    InvalidSubLevel(u8),
}

/// Four-tier skill level, A (lowest) to D (highest).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Level {
    A,
    B,
    C,
    D,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::A, Level::B, Level::C, Level::D];

    /// Tier index, 0 for A through 3 for D.
    pub fn tier(self) -> usize {
        self as usize
    }

    /// A and D are the extremes: they never share a court.
    pub fn excludes(self, other: Level) -> bool {
        matches!((self, other), (Level::A, Level::D) | (Level::D, Level::A))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::A => "A",
            Level::B => "B",
            Level::C => "C",
            Level::D => "D",
        };
        f.write_str(s)
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Level::A),
            "B" => Ok(Level::B),
            "C" => Ok(Level::C),
            "D" => Ok(Level::D),
            _ => Err(LevelError::UnknownLevel(s.trim().to_string())),
        }
    }
}

/// Major classification of the detailed skill bracket.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Detailed skill bracket: a major classification plus a sub level 1..=3.
///
/// Only used at the boundary; selection works on [`Level`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct SkillBracket {
    pub major: MajorLevel,
    pub sub: u8,
}

impl SkillBracket {
    pub fn new(major: MajorLevel, sub: u8) -> Result<Self, LevelError> {
        if !(1..=3).contains(&sub) {
            return Err(LevelError::InvalidSubLevel(sub));
        }
        Ok(Self { major, sub })
    }

    /// Numeric ranking 1..=12 (Beginner 1 is 1, Expert 3 is 12).
    pub fn numeric(&self) -> u8 {
        self.major as u8 * 3 + self.sub
    }
}

impl From<SkillBracket> for Level {
    fn from(bracket: SkillBracket) -> Self {
        match bracket.major {
            MajorLevel::Beginner => Level::A,
            MajorLevel::Intermediate => Level::B,
            MajorLevel::Advanced => Level::C,
            MajorLevel::Expert => Level::D,
        }
    }
}

/// Where a player is in the session queue.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// Waiting on the bench; only these players can be picked.
    #[default]
    Available,
    /// On court.
    InProgress,
    /// Picked for a match that has not started yet.
    Queued,
}

/// A club member at a session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub level: Level,
    pub games_played: u32,
    /// Ineligible players (paused, injured, left early) are never picked.
    pub eligible: bool,
    pub status: PlayerStatus,
}

impl Player {
    /// Create a new eligible, available player with no games played.
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level,
            games_played: 0,
            eligible: true,
            status: PlayerStatus::Available,
        }
    }

    /// Builder-style games count, handy for imports.
    pub fn with_games_played(mut self, games_played: u32) -> Self {
        self.games_played = games_played;
        self
    }

    /// Eligible and sitting on the bench.
    pub fn is_available(&self) -> bool {
        self.eligible && self.status == PlayerStatus::Available
    }

    pub fn queue(&mut self) {
        self.status = PlayerStatus::Queued;
    }

    pub fn start(&mut self) {
        self.status = PlayerStatus::InProgress;
    }

    /// Match over: count the game and send the player back to the bench.
    pub fn finish(&mut self) {
        self.games_played += 1;
        self.status = PlayerStatus::Available;
    }

    /// Back to the bench without counting a game (cancelled match).
    pub fn release(&mut self) {
        self.status = PlayerStatus::Available;
    }
}
