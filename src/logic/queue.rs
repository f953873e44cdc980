//! Match queue: pick, start, finish and cancel matches within a session.

use crate::logic::fair_selection::{balance_teams, select_fair_match};
use crate::models::{GameMatch, MatchId, MatchState, Player, PlayerId, Session, SessionError, Team};
use chrono::Utc;

/// Pick the next four players and queue their match.
///
/// Players go from `Available` to `Queued`. Selection failures are returned unchanged
/// (wrapped in [`SessionError::Selection`]) so callers can tell them apart.
pub fn queue_next_match(session: &mut Session) -> Result<MatchId, SessionError> {
    let selected = select_fair_match(&session.players)?;
    let (team_1, team_2) = balance_teams(&selected);
    let game = GameMatch::new(team_1, team_2);
    let id = game.id;

    for p in &selected {
        session
            .get_player_mut(p.id)
            .ok_or(SessionError::PlayerNotFound(p.id))?
            .queue();
    }
    session.matches.push(game);

    let names: Vec<&str> = selected.iter().map(|p| p.name.as_str()).collect();
    log::info!("Session {}: queued match {} ({})", session.id, id, names.join(", "));
    Ok(id)
}

/// Take a queued match onto court.
pub fn start_match(session: &mut Session, match_id: MatchId) -> Result<(), SessionError> {
    let player_ids = transition(session, match_id, MatchState::Queued, MatchState::InProgress)?;
    for_each_player(session, &player_ids, |p| p.start())?;
    if let Some(m) = session.get_match_mut(match_id) {
        m.started_at = Some(Utc::now());
    }
    log::info!("Session {}: match {} started", session.id, match_id);
    Ok(())
}

/// Finish a match on court. Every player gets one more game and returns to the bench.
pub fn complete_match(session: &mut Session, match_id: MatchId, winner: Option<Team>) -> Result<(), SessionError> {
    let player_ids = transition(session, match_id, MatchState::InProgress, MatchState::Completed)?;
    for_each_player(session, &player_ids, |p| p.finish())?;
    if let Some(m) = session.get_match_mut(match_id) {
        m.winner = winner;
        m.completed_at = Some(Utc::now());
    }
    log::info!("Session {}: match {} completed", session.id, match_id);
    Ok(())
}

/// Drop a queued or running match. No game is counted.
pub fn cancel_match(session: &mut Session, match_id: MatchId) -> Result<(), SessionError> {
    let m = session
        .get_match_mut(match_id)
        .ok_or(SessionError::MatchNotFound(match_id))?;
    if !m.is_open() {
        return Err(SessionError::InvalidMatchState {
            expected: MatchState::Queued,
            actual: m.state,
        });
    }
    m.state = MatchState::Cancelled;
    let player_ids = m.player_ids();
    for_each_player(session, &player_ids, |p| p.release())?;
    log::info!("Session {}: match {} cancelled", session.id, match_id);
    Ok(())
}

/// Move a match from `from` to `to`, returning its players.
fn transition(
    session: &mut Session,
    match_id: MatchId,
    from: MatchState,
    to: MatchState,
) -> Result<[PlayerId; 4], SessionError> {
    let m = session
        .get_match_mut(match_id)
        .ok_or(SessionError::MatchNotFound(match_id))?;
    if m.state != from {
        return Err(SessionError::InvalidMatchState {
            expected: from,
            actual: m.state,
        });
    }
    m.state = to;
    Ok(m.player_ids())
}

fn for_each_player(
    session: &mut Session,
    ids: &[PlayerId],
    mut f: impl FnMut(&mut Player),
) -> Result<(), SessionError> {
    for &pid in ids {
        f(session
            .get_player_mut(pid)
            .ok_or(SessionError::PlayerNotFound(pid))?);
    }
    Ok(())
}
