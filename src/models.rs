use std::sync::Arc;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use crate::errors::GameError;
use crate::services::scoring::Rating;
use crate::services::session::SessionStore;
use crate::services::validator::ValidationResult;

pub const BOARD_SIZE: usize = 7;

/// One week
pub const MAX_SESSION_TTL_MINUTES: i64 = 7 * 24 * 60;

/// Application state shared across all handlers
pub struct AppState {
    pub corpus: Arc<Vec<String>>,
    pub settings: GameSettings,
    pub sessions: SessionStore,
}

/// Tunables for board generation and play
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub min_len: usize,
    pub min_solutions: usize,
    pub max_attempts: usize,
    /// How many extra words may be sampled to grow a letter pool to 7
    pub merge_rounds: usize,
    pub session_ttl_minutes: i64,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            min_len: 4,
            min_solutions: 10,
            max_attempts: 200,
            merge_rounds: 50,
            session_ttl_minutes: 30,
        }
    }
}

impl GameSettings {
    /// Session lifetime, limited to 1 minute .. one week
    pub fn session_ttl(&self) -> Result<Duration, GameError> {
        if !(1..=MAX_SESSION_TTL_MINUTES).contains(&self.session_ttl_minutes) {
            return Err(GameError::InvalidSetting(format!(
                "session TTL must be between 1 and {} minutes, got {}",
                MAX_SESSION_TTL_MINUTES, self.session_ttl_minutes
            )));
        }
        Ok(Duration::minutes(self.session_ttl_minutes))
    }
}

/// Seven distinct letters, one of which is central
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: Vec<char>,
    central: char,
}

impl Board {
    pub fn new(letters: Vec<char>, central: char) -> Result<Board, GameError> {
        if letters.len() != BOARD_SIZE {
            return Err(GameError::InvalidBoard(format!(
                "expected {} letters, got {}", BOARD_SIZE, letters.len()
            )));
        }
        for (i, c) in letters.iter().enumerate() {
            if !c.is_alphabetic() {
                return Err(GameError::InvalidBoard(format!("'{}' is not a letter", c)));
            }
            if letters[..i].contains(c) {
                return Err(GameError::InvalidBoard(format!("'{}' appears twice", c)));
            }
        }
        if !letters.contains(&central) {
            return Err(GameError::InvalidBoard(format!(
                "central letter '{}' is not on the board", central
            )));
        }
        Ok(Board { letters, central })
    }

    /// All seven letters in presentation order
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn central(&self) -> char {
        self.central
    }

    /// The six letters around the central one
    pub fn outer(&self) -> Vec<char> {
        self.letters.iter().copied().filter(|&c| c != self.central).collect()
    }
}

#[derive(Deserialize)]
pub struct NewGameQuery {
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub word: String,
}

#[derive(Serialize)]
pub struct GameView {
    pub letters: Vec<char>,
    pub central: char,
    pub found: Vec<String>,
    pub score: u32,
    pub rating: Rating,
    pub solution_count: usize,
    pub max_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub accepted: bool,
    pub outcome: ValidationResult,
    pub message: String,
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pangram: Option<bool>,
    pub total_score: u32,
    pub rating: Rating,
}

#[derive(Serialize)]
pub struct RevealResponse {
    pub solutions: Vec<String>,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub min_len: usize,
    pub min_solutions: usize,
    pub max_attempts: usize,
    pub pangram_bonus: u32,
    pub corpus_size: usize,
    pub session_ttl_minutes: i64,
}
