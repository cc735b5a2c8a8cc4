use std::collections::BTreeSet;
use serde::Serialize;
use crate::models::Board;
use crate::utils::{uses_only_letters, word_len};

/// Outcome of checking a submission against a board.
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    TooShort,
    IllegalCharacter,
    MissingCentral,
    DisallowedLetter,
    AlreadyUsed,
    NotInCorpus,
    Valid,
}

impl ValidationResult {
    pub fn is_valid(self) -> bool {
        self == ValidationResult::Valid
    }

    /// Player-facing text for this outcome
    pub fn message(self, board: &Board, min_len: usize) -> String {
        match self {
            ValidationResult::TooShort => format!("Words must have at least {} letters.", min_len),
            ValidationResult::IllegalCharacter => "Use letters only (no digits or symbols).".to_string(),
            ValidationResult::MissingCentral => {
                format!("Words must contain the central letter '{}'.", board.central())
            }
            ValidationResult::DisallowedLetter => {
                let letters: Vec<String> = board.letters().iter().map(|c| c.to_string()).collect();
                format!("Use only the letters: {}.", letters.join(", "))
            }
            ValidationResult::AlreadyUsed => "You already found that word.".to_string(),
            ValidationResult::NotInCorpus => "Not in this game's dictionary.".to_string(),
            ValidationResult::Valid => "Good!".to_string(),
        }
    }
}

/// Board-only predicates: length, central letter and letter membership.
/// This is what decides whether a corpus word belongs in the solution set.
pub fn fits_board(word: &str, board: &Board, min_len: usize) -> bool {
    word_len(word) >= min_len
        && word.contains(board.central())
        && uses_only_letters(word, board.letters())
}

/// Classify a normalized word. The first failing check wins.
pub fn validate(
    word: &str,
    board: &Board,
    solutions: &BTreeSet<String>,
    used: &[String],
    min_len: usize,
) -> ValidationResult {
    if word_len(word) < min_len {
        return ValidationResult::TooShort;
    }
    if !word.chars().all(char::is_alphabetic) {
        return ValidationResult::IllegalCharacter;
    }
    if !word.contains(board.central()) {
        return ValidationResult::MissingCentral;
    }
    if !uses_only_letters(word, board.letters()) {
        return ValidationResult::DisallowedLetter;
    }
    if used.iter().any(|u| u == word) {
        return ValidationResult::AlreadyUsed;
    }
    if !solutions.contains(word) {
        return ValidationResult::NotInCorpus;
    }
    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new("hamptuc".chars().collect(), 'h').unwrap()
    }

    fn solutions() -> BTreeSet<String> {
        ["chap", "hamptuc", "much", "match"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_scenario() {
        let b = board();
        let sols = solutions();
        let mut used = Vec::new();

        assert_eq!(validate("chap", &b, &sols, &used, 4), ValidationResult::Valid);
        used.push("chap".to_string());
        assert_eq!(validate("chap", &b, &sols, &used, 4), ValidationResult::AlreadyUsed);

        assert_eq!(validate("hamptuc", &b, &sols, &used, 4), ValidationResult::Valid);
        assert_eq!(validate("much", &b, &sols, &used, 4), ValidationResult::Valid);
        assert_eq!(validate("dog", &b, &sols, &used, 4), ValidationResult::TooShort);
        assert_eq!(validate("xyz1", &b, &sols, &used, 4), ValidationResult::IllegalCharacter);
    }

    #[test]
    fn test_validate_each_failure() {
        let b = board();
        let sols = solutions();
        let used = Vec::new();

        assert_eq!(validate("camp", &b, &sols, &used, 4), ValidationResult::MissingCentral);
        assert_eq!(validate("chop", &b, &sols, &used, 4), ValidationResult::DisallowedLetter);
        assert_eq!(validate("hatch", &b, &sols, &used, 4), ValidationResult::NotInCorpus);
        assert_eq!(validate("", &b, &sols, &used, 4), ValidationResult::TooShort);
    }

    #[test]
    fn test_validate_check_order() {
        let b = board();
        let sols = solutions();
        let used = Vec::new();

        // Short beats everything else
        assert_eq!(validate("zz1", &b, &sols, &used, 4), ValidationResult::TooShort);
        // A digit is reported before the missing central letter
        assert_eq!(validate("cam1", &b, &sols, &used, 4), ValidationResult::IllegalCharacter);
        // Missing central is reported before foreign letters
        assert_eq!(validate("zzzz", &b, &sols, &used, 4), ValidationResult::MissingCentral);
    }

    #[test]
    fn test_used_word_never_becomes_valid_again() {
        let b = board();
        let sols = solutions();
        let used = vec!["much".to_string()];
        for _ in 0..3 {
            assert_eq!(validate("much", &b, &sols, &used, 4), ValidationResult::AlreadyUsed);
        }
    }

    #[test]
    fn test_fits_board() {
        let b = board();
        assert!(fits_board("hutch", &b, 4));
        assert!(!fits_board("hum", &b, 4));
        assert!(!fits_board("camp", &b, 4));
        assert!(!fits_board("hoop", &b, 4));
    }

    #[test]
    fn test_messages_mention_board() {
        let b = board();
        assert!(ValidationResult::MissingCentral.message(&b, 4).contains("'h'"));
        assert!(ValidationResult::TooShort.message(&b, 4).contains('4'));
        assert!(ValidationResult::DisallowedLetter.message(&b, 4).contains("h, a, m, p, t, u, c"));
        assert!(ValidationResult::Valid.is_valid());
        assert!(!ValidationResult::NotInCorpus.is_valid());
    }
}
