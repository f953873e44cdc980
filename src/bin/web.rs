//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Settings come from the environment, see `ServerConfig` (HOST, PORT, SESSION_TTL_HOURS, STATIC_DIR).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use shuttle_club::{
    cancel_match, complete_match, import_roster_csv, pair_first_round, plan_bracket,
    queue_next_match, seed_participants, shuffle_seeds, start_match, BracketPlan, Level, MatchId,
    Pairing, PairingPolicy, Participant, PlayerId, SelectionError, ServerConfig, Session,
    SessionError, SessionId, Team,
};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: session data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: Session,
    last_activity: Instant,
}

type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateSessionBody {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    level: Level,
}

#[derive(Deserialize)]
struct SetEligibleBody {
    eligible: bool,
}

#[derive(Deserialize)]
struct SetLevelBody {
    level: Level,
}

#[derive(Deserialize)]
struct CompleteMatchBody {
    winner: Option<Team>,
}

#[derive(Deserialize)]
struct BracketEntry {
    name: String,
    #[serde(default)]
    player_ids: Vec<PlayerId>,
}

#[derive(Deserialize)]
struct CreateBracketBody {
    entries: Vec<BracketEntry>,
    #[serde(default)]
    policy: PairingPolicy,
    /// Random draw instead of the given seeding order.
    #[serde(default)]
    shuffle: bool,
}

#[derive(Serialize)]
struct BracketResponse {
    participants: Vec<Participant>,
    plan: BracketPlan,
    first_round: Vec<Pairing>,
}

/// Response to queueing a match: the new match id plus the updated session.
#[derive(Serialize)]
struct QueuedMatchResponse<'a> {
    match_id: MatchId,
    session: &'a Session,
}

#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

#[derive(Deserialize)]
struct SessionPlayerPath {
    id: SessionId,
    player_id: PlayerId,
}

#[derive(Deserialize)]
struct SessionMatchPath {
    id: SessionId,
    match_id: MatchId,
}

#[derive(Deserialize)]
struct BracketSizePath {
    count: usize,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" }))
}

/// Selection failures carry a `kind` so the client can word them differently.
fn session_error(e: &SessionError) -> HttpResponse {
    let kind = match e {
        SessionError::Selection(SelectionError::InsufficientPlayers { .. }) => "insufficient_players",
        SessionError::Selection(SelectionError::CannotFormFairTeam) => "cannot_form_fair_team",
        _ => "invalid_request",
    };
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string(), "kind": kind }))
}

/// Look up a session, refresh its activity time, apply `f` and return the updated session.
fn update_session(
    state: &AppState,
    id: SessionId,
    f: impl FnOnce(&mut Session) -> Result<(), SessionError>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match f(&mut entry.session) {
        Ok(()) => HttpResponse::Ok().json(&entry.session),
        Err(e) => session_error(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "shuttle-club",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new session (returns it with id; client stores id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState, body: Option<Json<CreateSessionBody>>) -> HttpResponse {
    let name = body
        .map(|b| b.into_inner().name)
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Club night".to_string());
    let session = Session::new(name.trim());
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&session);
    log::info!("Created session {}", session.id);
    g.insert(
        session.id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    update_session(&state, path.id, |_| Ok(()))
}

#[post("/api/sessions/{id}/players")]
async fn api_add_player(state: AppState, path: Path<SessionPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    update_session(&state, path.id, |s| s.add_player(body.name.as_str(), body.level).map(|_| ()))
}

/// Import players from a CSV body (`name,level[,games_played]`). Existing names are skipped.
#[post("/api/sessions/{id}/players/import")]
async fn api_import_players(state: AppState, path: Path<SessionPath>, body: String) -> HttpResponse {
    let players = match import_roster_csv(body.as_bytes()) {
        Ok(p) => p,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    };
    update_session(&state, path.id, |s| {
        let added = s.import_players(players);
        log::info!("Session {}: imported {} player(s)", s.id, added);
        Ok(())
    })
}

/// Remove a player who is on the bench.
#[delete("/api/sessions/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    update_session(&state, path.id, |s| s.remove_player(path.player_id))
}

#[put("/api/sessions/{id}/players/{player_id}/eligible")]
async fn api_set_eligible(
    state: AppState,
    path: Path<SessionPlayerPath>,
    body: Json<SetEligibleBody>,
) -> HttpResponse {
    update_session(&state, path.id, |s| s.set_eligible(path.player_id, body.eligible))
}

#[put("/api/sessions/{id}/players/{player_id}/level")]
async fn api_set_level(state: AppState, path: Path<SessionPlayerPath>, body: Json<SetLevelBody>) -> HttpResponse {
    update_session(&state, path.id, |s| s.set_level(path.player_id, body.level))
}

/// Pick the next fair match and put it in the queue.
#[post("/api/sessions/{id}/matches/next")]
async fn api_queue_next_match(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match queue_next_match(&mut entry.session) {
        Ok(match_id) => HttpResponse::Ok().json(QueuedMatchResponse {
            match_id,
            session: &entry.session,
        }),
        Err(e) => session_error(&e),
    }
}

#[post("/api/sessions/{id}/matches/{match_id}/start")]
async fn api_start_match(state: AppState, path: Path<SessionMatchPath>) -> HttpResponse {
    update_session(&state, path.id, |s| start_match(s, path.match_id))
}

/// Finish a match; the winner is optional.
#[post("/api/sessions/{id}/matches/{match_id}/complete")]
async fn api_complete_match(
    state: AppState,
    path: Path<SessionMatchPath>,
    body: Option<Json<CompleteMatchBody>>,
) -> HttpResponse {
    let winner = body.and_then(|b| b.winner);
    update_session(&state, path.id, |s| complete_match(s, path.match_id, winner))
}

#[post("/api/sessions/{id}/matches/{match_id}/cancel")]
async fn api_cancel_match(state: AppState, path: Path<SessionMatchPath>) -> HttpResponse {
    update_session(&state, path.id, |s| cancel_match(s, path.match_id))
}

/// Round structure for a field of `count` entrants.
#[get("/api/brackets/{count}")]
async fn api_plan_bracket(path: Path<BracketSizePath>) -> HttpResponse {
    match plan_bracket(path.count) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Seed the entries, plan the bracket and pair the first round.
#[post("/api/brackets")]
async fn api_create_bracket(body: Json<CreateBracketBody>) -> HttpResponse {
    let body = body.into_inner();
    let entries: Vec<Participant> = body
        .entries
        .into_iter()
        .map(|e| Participant::new(e.name.trim(), e.player_ids))
        .collect();
    let participants = if body.shuffle {
        shuffle_seeds(entries, &mut rand::thread_rng())
    } else {
        seed_participants(entries)
    };
    let result = plan_bracket(participants.len()).and_then(|plan| {
        let first_round = pair_first_round(&participants, &plan, body.policy)?;
        Ok((plan, first_round))
    });
    match result {
        Ok((plan, first_round)) => HttpResponse::Ok().json(BracketResponse {
            participants,
            plan,
            first_round,
        }),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: every 30 minutes, remove sessions idle longer than the TTL
    let state_cleanup = state.clone();
    let ttl = config.session_ttl;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < ttl);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s)", removed);
            }
        }
    });

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_add_player)
            .service(api_import_players)
            .service(api_remove_player)
            .service(api_set_eligible)
            .service(api_set_level)
            .service(api_queue_next_match)
            .service(api_start_match)
            .service(api_complete_match)
            .service(api_cancel_match)
            .service(api_plan_bracket)
            .service(api_create_bracket)
            .service(Files::new("/static", static_dir.as_str()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;

    fn state_with_session(session: Session) -> AppState {
        let mut map = HashMap::new();
        map.insert(
            session.id,
            SessionEntry {
                session,
                last_activity: Instant::now(),
            },
        );
        Data::new(RwLock::new(map))
    }

    #[actix_web::test]
    async fn queue_next_match_returns_new_match_id() {
        let mut session = Session::new("Tuesday");
        for (name, level) in [("Alice", Level::B), ("Bob", Level::B), ("Cleo", Level::C), ("Dan", Level::C)] {
            session.add_player(name, level).unwrap();
        }
        let id = session.id;
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with_session(session))
                .service(api_queue_next_match),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/matches/next"))
            .to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        let match_id = body["match_id"].as_str().unwrap();
        let matches = body["session"]["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["id"].as_str(), Some(match_id));
    }

    #[actix_web::test]
    async fn queue_next_match_reports_selection_kind() {
        let session = Session::new("Tuesday");
        let id = session.id;
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with_session(session))
                .service(api_queue_next_match),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/matches/next"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["kind"], "insufficient_players");
    }

    #[test]
    fn page_script_never_renders_names_as_html() {
        let script = include_str!("../../static/app.js");
        assert!(!script.contains("innerHTML = `"));
        assert!(!script.contains("${p.name}</td>"));
    }
}
