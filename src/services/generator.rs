use std::collections::BTreeSet;
use rand::seq::SliceRandom;
use rand::Rng;
use log::debug;
use crate::errors::GameError;
use crate::models::{Board, GameSettings, BOARD_SIZE};
use crate::services::validator::fits_board;
use crate::utils::distinct_letters;

/// Every corpus word playable on the board, deduplicated and sorted
pub fn solutions_for_board(corpus: &[String], board: &Board, min_len: usize) -> Vec<String> {
    corpus.iter()
        .filter(|w| fits_board(w, board, min_len))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Grow a letter pool from a random seed word, sampling more words until it
/// holds exactly 7 letters or the merge budget runs out.
/// Returns None when the pool ends up at any other size.
fn pick_letter_pool<R: Rng>(corpus: &[String], merge_rounds: usize, rng: &mut R) -> Option<Vec<char>> {
    let base = corpus.choose(rng)?;
    let mut pool = distinct_letters(base);

    let mut rounds = 0;
    while pool.len() < BOARD_SIZE && rounds < merge_rounds {
        rounds += 1;
        let other = corpus.choose(rng)?;
        for c in distinct_letters(other) {
            if !pool.contains(&c) {
                pool.push(c);
            }
            if pool.len() == BOARD_SIZE {
                break;
            }
        }
    }

    if pool.len() == BOARD_SIZE { Some(pool) } else { None }
}

/// Pick a board with at least `min_solutions` playable words.
///
/// Each attempt builds a 7-letter pool from random corpus words, shuffles it
/// and picks a central letter at random. Pools of any other size are thrown
/// away rather than padded or cut. When the attempt budget is spent the
/// caller gets `GenerationFailed` with the best solution count seen.
pub fn generate_board<R: Rng>(
    corpus: &[String],
    settings: &GameSettings,
    rng: &mut R,
) -> Result<(Board, Vec<String>), GameError> {
    let mut best = 0;

    if corpus.is_empty() {
        return Err(GameError::GenerationFailed { attempts: 0, best });
    }

    for attempt in 1..=settings.max_attempts {
        let mut pool = match pick_letter_pool(corpus, settings.merge_rounds, rng) {
            Some(p) => p,
            None => {
                debug!("Attempt {}: could not gather {} letters", attempt, BOARD_SIZE);
                continue;
            }
        };

        pool.shuffle(rng);
        let central = match pool.choose(rng) {
            Some(&c) => c,
            None => continue,
        };
        let board = Board::new(pool, central)?;

        let solutions = solutions_for_board(corpus, &board, settings.min_len);
        debug!("Attempt {}: {:?} central '{}' has {} solutions",
               attempt, board.letters(), central, solutions.len());

        if solutions.len() >= settings.min_solutions {
            return Ok((board, solutions));
        }
        best = best.max(solutions.len());
    }

    Err(GameError::GenerationFailed { attempts: settings.max_attempts, best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::services::validator::{validate, ValidationResult};
    use crate::services::word_loader::builtin_words;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generated_boards_hold_invariants() {
        let corpus = builtin_words(4);
        let settings = GameSettings::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (board, solutions) = generate_board(&corpus, &settings, &mut rng).unwrap();

            let distinct: HashSet<char> = board.letters().iter().copied().collect();
            assert_eq!(distinct.len(), 7);
            assert!(board.letters().contains(&board.central()));
            assert!(solutions.len() >= settings.min_solutions);
        }
    }

    #[test]
    fn test_builtin_list_supports_longer_minimum() {
        let settings = GameSettings { min_len: 5, ..GameSettings::default() };
        let corpus = builtin_words(settings.min_len);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (board, solutions) = generate_board(&corpus, &settings, &mut rng).unwrap();
            assert!(solutions.len() >= settings.min_solutions, "seed {}: {:?}", seed, board);
            assert!(solutions.iter().all(|w| w.chars().count() >= 5));
        }
    }

    #[test]
    fn test_every_solution_validates() {
        let corpus = builtin_words(4);
        let settings = GameSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        let (board, solutions) = generate_board(&corpus, &settings, &mut rng).unwrap();

        let set: BTreeSet<String> = solutions.iter().cloned().collect();
        for w in &solutions {
            assert_eq!(validate(w, &board, &set, &[], settings.min_len), ValidationResult::Valid);
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let corpus = builtin_words(4);
        let settings = GameSettings::default();
        let a = generate_board(&corpus, &settings, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_board(&corpus, &settings, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_corpus_fails() {
        let settings = GameSettings::default();
        let err = generate_board(&[], &settings, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, GameError::GenerationFailed { attempts: 0, best: 0 }));
    }

    #[test]
    fn test_too_few_solutions_fails_with_best_count() {
        // Only one word, so at most one solution however the board is drawn
        let corpus = words(&["matchup"]);
        let settings = GameSettings { max_attempts: 30, ..GameSettings::default() };
        let err = generate_board(&corpus, &settings, &mut StdRng::seed_from_u64(3)).unwrap_err();
        match err {
            GameError::GenerationFailed { attempts, best } => {
                assert_eq!(attempts, 30);
                assert_eq!(best, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_oversized_pool_is_discarded() {
        // Eight distinct letters in every word: no pool can be exactly seven
        let corpus = words(&["abcdefgh", "hgfedcba"]);
        let settings = GameSettings { min_solutions: 0, max_attempts: 10, ..GameSettings::default() };
        assert!(generate_board(&corpus, &settings, &mut StdRng::seed_from_u64(9)).is_err());
    }

    #[test]
    fn test_undersized_pool_is_discarded() {
        // Only five letters exist in the whole corpus
        let corpus = words(&["chap", "champ", "mach"]);
        let settings = GameSettings { min_solutions: 0, max_attempts: 10, ..GameSettings::default() };
        assert!(generate_board(&corpus, &settings, &mut StdRng::seed_from_u64(9)).is_err());
    }

    #[test]
    fn test_solutions_for_board_dedupes_and_sorts() {
        let board = Board::new("hamptuc".chars().collect(), 'h').unwrap();
        let corpus = words(&["much", "chap", "much", "camp", "hoop", "hum", "chap"]);
        assert_eq!(solutions_for_board(&corpus, &board, 4), vec!["chap", "much"]);
    }
}
