//! Badminton club organizer: library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use logic::{
    balance_teams, cancel_match, complete_match, import_roster_csv, pair_first_round, plan_bracket,
    queue_next_match, round_name, select_fair_match, shuffle_seeds, start_match, BracketError,
    PairingPolicy, RosterError, SelectionError,
};
pub use models::{
    seed_participants, BracketPlan, GameMatch, Level, LevelError, MajorLevel, MatchId, MatchState,
    Pairing, Participant, ParticipantId, Player, PlayerId, PlayerStatus, Round, RoundKind, Session,
    SessionError, SessionId, SkillBracket, Team,
};
