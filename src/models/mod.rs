//! Data structures for club sessions: players, matches, bracket participants and rounds.

mod game;
mod participant;
mod player;
mod round;
mod session;

pub use game::{GameMatch, MatchId, MatchState, Team};
pub use participant::{seed_participants, Participant, ParticipantId};
pub use player::{Level, LevelError, MajorLevel, Player, PlayerId, PlayerStatus, SkillBracket};
pub use round::{BracketPlan, Pairing, Round, RoundKind};
pub use session::{Session, SessionError, SessionId};
