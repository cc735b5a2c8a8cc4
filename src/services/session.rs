use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use crate::errors::GameError;
use crate::models::Board;
use crate::services::scoring::{is_pangram, max_score, word_score, Rating};
use crate::services::validator::{validate, ValidationResult};
use crate::utils::normalize;

/// One player's puzzle: a fixed board and its solutions, plus progress so far
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    solutions: BTreeSet<String>,
    found: Vec<String>,
    score: u32,
    max_score: u32,
    min_len: usize,
}

/// Result of a single submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub outcome: ValidationResult,
    pub word: String,
    pub points: u32,
    pub pangram: bool,
    pub total_score: u32,
    pub rating: Rating,
}

impl Game {
    pub fn new(board: Board, solutions: Vec<String>, min_len: usize) -> Game {
        let solutions: BTreeSet<String> = solutions.into_iter().collect();
        let max_score = max_score(&solutions, &board);
        Game {
            board,
            solutions,
            found: Vec::new(),
            score: 0,
            max_score,
            min_len,
        }
    }

    /// Normalize and check a raw submission, recording it when valid
    pub fn submit(&mut self, raw: &str) -> Submission {
        let word = normalize(raw);
        let outcome = validate(&word, &self.board, &self.solutions, &self.found, self.min_len);

        let (points, pangram) = if outcome.is_valid() {
            let pangram = is_pangram(&word, &self.board);
            let points = word_score(&word, pangram);
            self.found.push(word.clone());
            self.score += points;
            (points, pangram)
        } else {
            (0, false)
        };

        Submission {
            outcome,
            word,
            points,
            pangram,
            total_score: self.score,
            rating: self.rating(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Sorted solution list
    pub fn solutions(&self) -> Vec<String> {
        self.solutions.iter().cloned().collect()
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Words found so far, in the order they were found
    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score, self.max_score)
    }
}

struct SessionEntry {
    game: Game,
    last_seen: DateTime<Utc>,
}

/// In-memory games keyed by session id, expiring after a period of inactivity
pub struct SessionStore {
    entries: Mutex<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> SessionStore {
        SessionStore {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_live(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        now - entry.last_seen < self.ttl
    }

    /// Run `f` against the session's game as one atomic step.
    ///
    /// A missing or expired session is replaced by a game from `start`, which
    /// runs outside the lock since generating a board can be slow.
    pub fn with_game<S, F, T>(&self, id: &str, now: DateTime<Utc>, start: S, f: F) -> Result<T, GameError>
    where
        S: Fn() -> Result<Game, GameError>,
        F: FnOnce(&mut Game) -> T,
    {
        let live = {
            let entries = self.lock();
            entries.get(id).map_or(false, |e| self.is_live(e, now))
        };

        let mut fresh = if live {
            None
        } else {
            debug!("No live game for session {}, starting one", id);
            Some(start()?)
        };

        loop {
            let mut entries = self.lock();
            let live = entries.get(id).map_or(false, |e| self.is_live(e, now));
            if !live {
                match fresh.take() {
                    Some(game) => {
                        entries.insert(id.to_string(), SessionEntry { game, last_seen: now });
                    }
                    None => {
                        // Purged between the two locks
                        drop(entries);
                        fresh = Some(start()?);
                        continue;
                    }
                }
            }
            if let Some(entry) = entries.get_mut(id) {
                entry.last_seen = now;
                return Ok(f(&mut entry.game));
            }
        }
    }

    /// Install a new game for the session, discarding any previous one
    pub fn replace(&self, id: &str, game: Game, now: DateTime<Utc>) {
        self.lock().insert(id.to_string(), SessionEntry { game, last_seen: now });
    }

    /// Drop expired sessions, returning how many were removed
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, e| now - e.last_seen < self.ttl);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}
