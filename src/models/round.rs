//! Bracket rounds, pairings and the full plan.

use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// Whether a round normalizes the field or is a regular named round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Extra round that cuts an odd-sized field down to the next canonical size.
    PreRound,
    Named,
}

/// One round of an elimination bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub kind: RoundKind,
    pub name: String,
    /// Entrants at the start of the round.
    pub player_count: usize,
    pub match_count: usize,
    /// Entrants going through to the next round.
    pub advancing_count: usize,
}

impl Round {
    /// Entrants that sit the round out and advance directly.
    ///
    /// None when the round has more matches than its entrants can fill.
    pub fn byes(&self) -> Option<usize> {
        self.match_count
            .checked_mul(2)
            .and_then(|playing| self.player_count.checked_sub(playing))
    }
}

/// Who plays whom in a round, by participant id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    /// Index into `BracketPlan::rounds`.
    pub round_index: usize,
    /// 1-based match number within the round.
    pub match_number: usize,
    pub first: ParticipantId,
    pub second: ParticipantId,
}

/// Ordered rounds from the full field down to the final.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketPlan {
    pub participant_count: usize,
    pub rounds: Vec<Round>,
}

impl BracketPlan {
    /// The deciding round (`advancing_count == 1`).
    pub fn winner_round(&self) -> Option<&Round> {
        self.rounds.last().filter(|r| r.advancing_count == 1)
    }

    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.match_count).sum()
    }
}
