//! Property-based tests for fair selection and bracket planning using proptest
//!
//! These check the selection invariants (four distinct available players, level cap,
//! no A/D mix) and the bracket invariants over randomly generated rosters and field sizes.

use proptest::prelude::*;
use shuttle_club::{plan_bracket, select_fair_match, Level, Player, PlayerStatus, SelectionError};
use std::collections::HashSet;

fn level_strategy() -> impl Strategy<Value = Level> {
    (0usize..4).prop_map(|i| Level::ALL[i])
}

fn status_strategy() -> impl Strategy<Value = PlayerStatus> {
    prop_oneof![
        4 => Just(PlayerStatus::Available),
        1 => Just(PlayerStatus::InProgress),
        1 => Just(PlayerStatus::Queued),
    ]
}

// Roster of up to 16 players with unique names
fn roster_strategy() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((level_strategy(), 0u32..5, any::<bool>(), status_strategy()), 0..16).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (level, games, eligible, status))| {
                    let mut p = Player::new(format!("Player{i:02}"), level).with_games_played(games);
                    p.eligible = eligible;
                    p.status = status;
                    p
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn selection_respects_all_rules(players in roster_strategy()) {
        let available = players.iter().filter(|p| p.is_available()).count();
        match select_fair_match(&players) {
            Ok(selected) => {
                let ids: HashSet<_> = selected.iter().map(|p| p.id).collect();
                prop_assert_eq!(ids.len(), 4);
                for p in &selected {
                    let original = players.iter().find(|x| x.id == p.id);
                    prop_assert!(original.is_some_and(|o| o.is_available()));
                }
                for level in Level::ALL {
                    prop_assert!(selected.iter().filter(|p| p.level == level).count() <= 2);
                }
                let has_a = selected.iter().any(|p| p.level == Level::A);
                let has_d = selected.iter().any(|p| p.level == Level::D);
                prop_assert!(!(has_a && has_d));
            }
            Err(SelectionError::InsufficientPlayers { available: n }) => {
                prop_assert!(available < 4);
                prop_assert_eq!(n, available);
            }
            Err(SelectionError::CannotFormFairTeam) => prop_assert!(available >= 4),
        }
    }

    #[test]
    fn selection_is_deterministic(players in roster_strategy()) {
        prop_assert_eq!(select_fair_match(&players), select_fair_match(&players));
    }

    #[test]
    fn bracket_reduces_field_to_one(n in 2usize..=128) {
        let plan = plan_bracket(n).unwrap();
        prop_assert_eq!(plan.rounds[0].player_count, n);
        prop_assert_eq!(plan.total_matches(), n - 1);
        for pair in plan.rounds.windows(2) {
            prop_assert_eq!(pair[0].advancing_count, pair[1].player_count);
        }
        prop_assert_eq!(plan.rounds.last().map(|r| r.advancing_count), Some(1));
    }
}
