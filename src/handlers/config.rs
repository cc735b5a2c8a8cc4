use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, ConfigResponse};
use crate::services::scoring::PANGRAM_BONUS;
use log::info;

#[get("/config")]
pub async fn get_config(data: web::Data<AppState>) -> impl Responder {
    let settings = &data.settings;
    let corpus_size = data.corpus.len();

    info!("Config requested: min_len {}, min_solutions {}, {} words, {} live sessions",
          settings.min_len, settings.min_solutions, corpus_size, data.sessions.len());

    HttpResponse::Ok().json(ConfigResponse {
        min_len: settings.min_len,
        min_solutions: settings.min_solutions,
        max_attempts: settings.max_attempts,
        pangram_bonus: PANGRAM_BONUS,
        corpus_size,
        session_ttl_minutes: settings.session_ttl_minutes,
    })
}
