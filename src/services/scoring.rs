use std::fmt;
use serde::{Serialize, Serializer};
use crate::models::Board;
use crate::utils::{contains_all_letters, word_len};

pub const PANGRAM_BONUS: u32 = 7;

/// A pangram uses every letter on the board at least once
pub fn is_pangram(word: &str, board: &Board) -> bool {
    contains_all_letters(word, board.letters())
}

/// Four-letter words are worth 1, longer words their length.
/// Pangrams earn a flat bonus on top.
pub fn word_score(word: &str, pangram: bool) -> u32 {
    let len = word_len(word) as u32;
    let base = if len <= 4 { 1 } else { len };
    if pangram { base + PANGRAM_BONUS } else { base }
}

/// Total available on a board
pub fn max_score<'a, I>(solutions: I, board: &Board) -> u32
where
    I: IntoIterator<Item = &'a String>,
{
    solutions.into_iter()
        .map(|w| word_score(w, is_pangram(w, board)))
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Beginner,
    GoodStart,
    MovingUp,
    Excellent,
    Genius,
}

impl Rating {
    pub fn from_score(score: u32, max_score: u32) -> Rating {
        if max_score == 0 {
            return Rating::Beginner;
        }
        let ratio = score as f64 / max_score as f64;
        if ratio < 0.15 {
            Rating::Beginner
        } else if ratio < 0.35 {
            Rating::GoodStart
        } else if ratio < 0.60 {
            Rating::MovingUp
        } else if ratio < 0.90 {
            Rating::Excellent
        } else {
            Rating::Genius
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Beginner => "Beginner",
            Rating::GoodStart => "Good Start",
            Rating::MovingUp => "Moving Up",
            Rating::Excellent => "Excellent",
            Rating::Genius => "Genius",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
