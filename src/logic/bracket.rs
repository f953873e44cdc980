//! Elimination bracket: round structure and first-round pairings.

use crate::models::{seed_participants, BracketPlan, Pairing, Participant, Round, RoundKind};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bracket sizes with a standard round structure, largest first.
pub const CANONICAL_SIZES: [usize; 6] = [64, 32, 16, 8, 4, 2];

/// Largest field one pre-round can cut down to the top canonical size.
pub const MAX_FIELD_SIZE: usize = 2 * CANONICAL_SIZES[0];

/// Errors from bracket planning and pairing.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BracketError {
    #[error("Need at least 2 participants (have {0})")]
    TooFewParticipants(usize),
    #[error("{count} participants is more than the supported maximum of {max}")]
    UnsupportedFieldSize { count: usize, max: usize },
    #[error("Bracket is planned for {expected} participants, got {actual}")]
    ParticipantCountMismatch { expected: usize, actual: usize },
    #[error("Round '{0}' does not fit its field")]
    InconsistentPlan(String),
}

/// How seeds are matched up in a round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingPolicy {
    /// Neighbours in seeding order: 1 v 2, 3 v 4, ...
    #[default]
    Adjacent,
    /// Top against bottom: 1 v n, 2 v n-1, ...
    Folded,
}

/// Label for a named round that starts with `size` entrants.
pub fn round_name(size: usize) -> String {
    match size {
        2 => "Championship".to_string(),
        4 => "Semi Finals".to_string(),
        8 => "Quarter Finals".to_string(),
        n => format!("Round of {n}"),
    }
}

/// Compute the rounds that reduce `participant_count` entrants to one winner.
///
/// Each step targets the largest canonical size not above the current field. A field
/// above its target first plays a pre-round of `field - target` matches (the rest get a
/// bye); a field already at a canonical size plays a named round that halves it.
pub fn plan_bracket(participant_count: usize) -> Result<BracketPlan, BracketError> {
    if participant_count < 2 {
        return Err(BracketError::TooFewParticipants(participant_count));
    }
    if participant_count > MAX_FIELD_SIZE {
        return Err(BracketError::UnsupportedFieldSize {
            count: participant_count,
            max: MAX_FIELD_SIZE,
        });
    }

    let mut rounds = Vec::new();
    let mut current = participant_count;
    while current > 1 {
        let Some(target) = CANONICAL_SIZES.iter().copied().find(|&s| s <= current) else {
            break;
        };
        let round = if current > target {
            Round {
                kind: RoundKind::PreRound,
                name: "Pre-Round".to_string(),
                player_count: current,
                match_count: current - target,
                advancing_count: target,
            }
        } else {
            Round {
                kind: RoundKind::Named,
                name: round_name(current),
                player_count: current,
                match_count: current / 2,
                advancing_count: current / 2,
            }
        };
        log::debug!(
            "{}: {} players, {} matches, {} advance",
            round.name,
            round.player_count,
            round.match_count,
            round.advancing_count
        );
        current = round.advancing_count;
        rounds.push(round);
    }

    Ok(BracketPlan {
        participant_count,
        rounds,
    })
}

/// Pair participants for the first round of `plan`, in the order given.
///
/// In a pre-round the top seeds take the byes and only the remaining seeds play.
pub fn pair_first_round(
    participants: &[Participant],
    plan: &BracketPlan,
    policy: PairingPolicy,
) -> Result<Vec<Pairing>, BracketError> {
    if participants.len() != plan.participant_count {
        return Err(BracketError::ParticipantCountMismatch {
            expected: plan.participant_count,
            actual: participants.len(),
        });
    }
    let first = plan
        .rounds
        .first()
        .ok_or(BracketError::TooFewParticipants(participants.len()))?;

    if first.player_count != participants.len() {
        return Err(BracketError::ParticipantCountMismatch {
            expected: first.player_count,
            actual: participants.len(),
        });
    }
    let byes = first
        .byes()
        .ok_or_else(|| BracketError::InconsistentPlan(first.name.clone()))?;

    let playing = &participants[byes..];
    let n = playing.len();
    let pairs: Vec<(&Participant, &Participant)> = match policy {
        PairingPolicy::Adjacent => playing.chunks_exact(2).map(|c| (&c[0], &c[1])).collect(),
        PairingPolicy::Folded => (0..n / 2).map(|i| (&playing[i], &playing[n - 1 - i])).collect(),
    };

    Ok(pairs
        .into_iter()
        .enumerate()
        .map(|(i, (a, b))| Pairing {
            round_index: 0,
            match_number: i + 1,
            first: a.id,
            second: b.id,
        })
        .collect())
}

/// Shuffle the entry list and renumber seeds for a random draw.
pub fn shuffle_seeds<R: Rng + ?Sized>(mut participants: Vec<Participant>, rng: &mut R) -> Vec<Participant> {
    participants.shuffle(rng);
    seed_participants(participants)
}
