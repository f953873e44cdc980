//! Club business logic: fair selection, match queue, roster import, brackets.

mod bracket;
mod fair_selection;
mod queue;
mod roster;

pub use bracket::{
    pair_first_round, plan_bracket, round_name, shuffle_seeds, BracketError, PairingPolicy,
    CANONICAL_SIZES, MAX_FIELD_SIZE,
};
pub use fair_selection::{balance_teams, select_fair_match, SelectionError, MATCH_SIZE, MAX_PER_LEVEL};
pub use queue::{cancel_match, complete_match, queue_next_match, start_match};
pub use roster::{import_roster_csv, RosterError};
