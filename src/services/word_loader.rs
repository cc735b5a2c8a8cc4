use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use log::{info, warn};
use crate::errors::GameError;
use crate::models::{Board, GameSettings};
use crate::services::generator::solutions_for_board;
use crate::utils::{normalize, word_len};

/// Letters of the fallback dictionary
const BUILTIN_ALPHABET: &str = "achmptu";

/// Fallback dictionary. Every word is spelled from a,c,h,m,p,t,u, so any
/// 7-letter pool drawn from it is that alphabet.
const BUILTIN_WORDS: &[&str] = &[
    "camp", "tamp", "tact", "mutt", "putt", "pact", "puma",
    "chap", "champ", "chat", "chum", "chump", "much", "mach",
    "math", "path", "hath", "hump", "thump", "catch", "match",
    "patch", "hatch", "hutch", "cutch", "caput", "thatch", "attach",
    "matchup",
];

/// Where the corpus came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusSource {
    File,
    Builtin,
}

/// Read one word per line, normalizing each and keeping those of at least `min_len` characters
pub fn parse_words<R: BufRead>(reader: R, min_len: usize) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = normalize(&line);
        if !word.is_empty() && word_len(&word) >= min_len {
            words.push(word);
        }
    }
    Ok(words)
}

/// The built-in list, normalized and length-filtered
pub fn builtin_words(min_len: usize) -> Vec<String> {
    BUILTIN_WORDS.iter()
        .map(|w| normalize(w))
        .filter(|w| word_len(w) >= min_len)
        .collect()
}

/// Most solutions any board drawn from the built-in list can have
pub fn builtin_max_solutions(min_len: usize) -> usize {
    let words = builtin_words(min_len);
    let alphabet: Vec<char> = BUILTIN_ALPHABET.chars().collect();
    alphabet.iter()
        .filter_map(|&central| Board::new(alphabet.clone(), central).ok())
        .map(|board| solutions_for_board(&words, &board, min_len).len())
        .max()
        .unwrap_or(0)
}

/// Reject settings under which the built-in list can never yield a board
pub fn check_builtin_settings(settings: &GameSettings) -> Result<(), GameError> {
    let best = builtin_max_solutions(settings.min_len);
    if best < settings.min_solutions {
        return Err(GameError::InvalidSetting(format!(
            "the built-in word list has at most {} solutions per board at min length {}, \
             but {} are required; pass --corpus or lower --min-len/--min-solutions",
            best, settings.min_len, settings.min_solutions
        )));
    }
    Ok(())
}

fn load_words(file_path: &Path, min_len: usize) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    parse_words(io::BufReader::new(file), min_len)
}

/// Load the corpus from `path`, falling back to the built-in list when the
/// file is missing, unreadable or has no usable words
pub fn load_corpus(path: Option<&Path>, min_len: usize) -> (Vec<String>, CorpusSource) {
    let (words, source) = match path {
        Some(p) => match load_words(p, min_len) {
            Ok(words) if !words.is_empty() => {
                info!("Loaded {} words from {}.", words.len(), p.display());
                (words, CorpusSource::File)
            }
            Ok(_) => {
                warn!("No usable words in {}. Using built-in list.", p.display());
                (builtin_words(min_len), CorpusSource::Builtin)
            }
            Err(e) => {
                warn!("Failed to load corpus at {}: {}. Using built-in list.", p.display(), e);
                (builtin_words(min_len), CorpusSource::Builtin)
            }
        },
        None => {
            info!("No corpus file given. Using built-in list.");
            (builtin_words(min_len), CorpusSource::Builtin)
        }
    };

    info!("Total corpus words (min_len {}): {}", min_len, words.len());
    (words, source)
}
