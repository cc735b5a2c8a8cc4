mod errors;
mod handlers;
mod models;
mod services;
mod utils;

use actix_web::{web, App, HttpServer};
use chrono::Utc;
use clap::{Arg, Command};
use log::{debug, info};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::handlers::config::get_config;
use crate::handlers::game::{current_game, new_game, reveal, submit_word};
use crate::models::{AppState, GameSettings};
use crate::services::session::SessionStore;
use crate::services::word_loader::{check_builtin_settings, load_corpus, CorpusSource};

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> std::io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(matches: &clap::ArgMatches, name: &str) -> std::io::Result<T> {
    let raw = matches.get_one::<String>(name).map(String::as_str).unwrap_or_default();
    raw.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("--{} expects a number, got '{}'", name, raw))
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let matches = Command::new("beed")
        .version("1.0")
        .author("Ron Straight <straightre@gmail.com>")
        .about("Spelling-bee puzzle service")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:2346")
                .help("Specify the listen address (e.g., 0.0.0.0:2346)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .num_args(1)
                .help("Word list, one word per line (if omitted, a built-in list is used)"),
        )
        .arg(
            Arg::new("min-len")
                .long("min-len")
                .num_args(1)
                .default_value("4")
                .help("Minimum word length"),
        )
        .arg(
            Arg::new("min-solutions")
                .long("min-solutions")
                .num_args(1)
                .default_value("10")
                .help("Minimum number of solutions a board must have"),
        )
        .arg(
            Arg::new("max-attempts")
                .long("max-attempts")
                .num_args(1)
                .default_value("200")
                .help("Board generation attempts before giving up"),
        )
        .arg(
            Arg::new("session-ttl")
                .long("session-ttl")
                .num_args(1)
                .default_value("30")
                .help("Minutes of inactivity before a game is dropped"),
        )
        .get_matches();

    let listen_host = matches
        .get_one::<String>("listen-host")
        .cloned()
        .unwrap_or_else(|| "0.0.0.0:2346".to_string());
    let log_file = matches.get_one::<String>("log-file");
    let corpus_path = matches.get_one::<String>("corpus").map(Path::new);

    init_logging(log_file)?;

    let settings = GameSettings {
        min_len: parse_number(&matches, "min-len")?,
        min_solutions: parse_number(&matches, "min-solutions")?,
        max_attempts: parse_number(&matches, "max-attempts")?,
        session_ttl_minutes: parse_number(&matches, "session-ttl")?,
        ..GameSettings::default()
    };
    info!("Game settings: {:?}", settings);

    let ttl = settings.session_ttl()?;
    let (corpus, source) = load_corpus(corpus_path, settings.min_len);
    if source == CorpusSource::Builtin {
        check_builtin_settings(&settings)?;
    }

    let state = AppState {
        corpus: Arc::new(corpus),
        settings,
        sessions: SessionStore::new(ttl),
    };
    let shared_state = web::Data::new(state);

    let sweeper_state = shared_state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            let purged = sweeper_state.sessions.purge_expired(Utc::now());
            if purged > 0 {
                debug!("Purged {} expired sessions, {} live", purged, sweeper_state.sessions.len());
            }
        }
    });

    info!("Listening on {}", listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .service(get_config)
            .service(current_game)
            .service(new_game)
            .service(submit_word)
            .service(reveal)
    })
    .bind(&listen_host)?
    .run()
    .await
}
