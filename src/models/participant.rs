//! Tournament participants (a single player or a doubles pair) and seeding.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a bracket participant.
pub type ParticipantId = Uuid;

/// One entry in the bracket. `seed_number` is its 1-based position in the seeding order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub seed_number: u32,
    pub name: String,
    /// One player for singles, two for doubles. May be empty for guest entries.
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
}

impl Participant {
    pub fn new(name: impl Into<String>, player_ids: Vec<PlayerId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            seed_number: 0,
            name: name.into(),
            player_ids,
        }
    }
}

/// Number participants 1..=n in the given order. The order is the seeding.
pub fn seed_participants(entries: Vec<Participant>) -> Vec<Participant> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, mut p)| {
            p.seed_number = i as u32 + 1;
            p
        })
        .collect()
}
