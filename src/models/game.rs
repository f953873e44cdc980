//! Doubles match (game) on a court, Team, and MatchState.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side won the match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

/// Lifecycle of a queued match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// Players picked, waiting for a free court.
    #[default]
    Queued,
    InProgress,
    Completed,
    Cancelled,
}

/// A single 2v2 match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team_1: [PlayerId; 2],
    pub team_2: [PlayerId; 2],
    pub state: MatchState,
    /// None if not played or no score was recorded.
    pub winner: Option<Team>,
    pub queued_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    pub fn new(team_1: [PlayerId; 2], team_2: [PlayerId; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_1,
            team_2,
            state: MatchState::Queued,
            winner: None,
            queued_at: Utc::now(),
            started_at: None,
            completed_at: None,
        }
    }

    /// All four players, team 1 first.
    pub fn player_ids(&self) -> [PlayerId; 4] {
        [self.team_1[0], self.team_1[1], self.team_2[0], self.team_2[1]]
    }

    /// Queued or on court.
    pub fn is_open(&self) -> bool {
        matches!(self.state, MatchState::Queued | MatchState::InProgress)
    }
}
