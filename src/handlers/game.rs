use actix_web::cookie::Cookie;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use crate::errors::GameError;
use crate::models::{AppState, GameView, NewGameQuery, RevealResponse, SubmitRequest, SubmitResponse};
use crate::services::generator::generate_board;
use crate::services::session::Game;

pub const SESSION_COOKIE: &str = "beed_session";

/// Existing session id from the cookie, or a freshly issued one
fn session_id(req: &HttpRequest) -> (String, bool) {
    match req.cookie(SESSION_COOKIE) {
        Some(c) if !c.value().is_empty() => (c.value().to_string(), false),
        _ => (format!("{:032x}", rand::random::<u128>()), true),
    }
}

fn respond<T: Serialize>(id: &str, issued: bool, body: &T) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    if issued {
        builder.cookie(
            Cookie::build(SESSION_COOKIE, id.to_string())
                .path("/")
                .http_only(true)
                .finish(),
        );
    }
    builder.json(body)
}

fn generation_failed(err: GameError) -> HttpResponse {
    warn!("{}", err);
    HttpResponse::ServiceUnavailable().body(err.to_string())
}

fn start_game<R: Rng>(data: &AppState, rng: &mut R) -> Result<Game, GameError> {
    let (board, solutions) = generate_board(&data.corpus, &data.settings, rng)?;
    info!("New board {:?} (central '{}') with {} solutions",
          board.letters(), board.central(), solutions.len());
    Ok(Game::new(board, solutions, data.settings.min_len))
}

fn view(game: &Game, message: Option<String>) -> GameView {
    GameView {
        letters: game.board().outer(),
        central: game.board().central(),
        found: game.found().to_vec(),
        score: game.score(),
        rating: game.rating(),
        solution_count: game.solution_count(),
        max_score: game.max_score(),
        message,
    }
}

#[get("/game")]
pub async fn current_game(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let (id, issued) = session_id(&req);
    let start = || start_game(&data, &mut rand::thread_rng());

    match data.sessions.with_game(&id, Utc::now(), start, |game| view(game, None)) {
        Ok(v) => respond(&id, issued, &v),
        Err(e) => generation_failed(e),
    }
}

#[post("/game/new")]
pub async fn new_game(
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<NewGameQuery>,
) -> impl Responder {
    let (id, issued) = session_id(&req);

    let game = match query.seed {
        Some(seed) => start_game(&data, &mut StdRng::seed_from_u64(seed)),
        None => start_game(&data, &mut rand::thread_rng()),
    };

    match game {
        Ok(game) => {
            let v = view(&game, Some("New game started!".to_string()));
            data.sessions.replace(&id, game, Utc::now());
            respond(&id, issued, &v)
        }
        Err(e) => generation_failed(e),
    }
}

#[post("/game/submit")]
pub async fn submit_word(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<SubmitRequest>,
) -> impl Responder {
    let (id, issued) = session_id(&req);
    let start = || start_game(&data, &mut rand::thread_rng());

    let result = data.sessions.with_game(&id, Utc::now(), start, |game| {
        let s = game.submit(&body.word);
        let message = match s.outcome.is_valid() {
            true if s.pangram => format!("Pangram! '{}' is worth {} points.", s.word, s.points),
            true => format!("Good! '{}' is worth {} point(s).", s.word, s.points),
            false => s.outcome.message(game.board(), game.min_len()),
        };
        (s, message)
    });

    let (s, message) = match result {
        Ok(r) => r,
        Err(e) => return generation_failed(e),
    };

    if s.outcome.is_valid() {
        info!("Accepted '{}' for {} points (total {})", s.word, s.points, s.total_score);
    } else {
        debug!("Rejected '{}': {:?}", s.word, s.outcome);
    }

    let accepted = s.outcome.is_valid();
    respond(&id, issued, &SubmitResponse {
        accepted,
        outcome: s.outcome,
        message,
        word: s.word,
        word_score: accepted.then_some(s.points),
        pangram: accepted.then_some(s.pangram),
        total_score: s.total_score,
        rating: s.rating,
    })
}

/// Full solution list. A development aid: anyone can call it.
#[get("/game/reveal")]
pub async fn reveal(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let (id, issued) = session_id(&req);
    let start = || start_game(&data, &mut rand::thread_rng());

    match data.sessions.with_game(&id, Utc::now(), start, |game| game.solutions()) {
        Ok(solutions) => {
            warn!("Revealed {} solutions for session {}", solutions.len(), id);
            respond(&id, issued, &RevealResponse { solutions })
        }
        Err(e) => generation_failed(e),
    }
}
