use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical form used for every corpus and submission comparison:
/// compatibility-decomposed, combining marks stripped, lower-cased.
/// Characters without a decomposition are kept as they are (lower-cased).
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .nfkd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Length in characters, not bytes
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Distinct alphabetic characters of a word, in order of first appearance
pub fn distinct_letters(word: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    word.chars()
        .filter(|c| c.is_alphabetic() && seen.insert(*c))
        .collect()
}

/// Check if a word is spelled using only the given letters.
/// Letters may be reused any number of times.
pub fn uses_only_letters(word: &str, letters: &[char]) -> bool {
    word.chars().all(|c| letters.contains(&c))
}

/// Check if every one of the given letters appears somewhere in the word
pub fn contains_all_letters(word: &str, letters: &[char]) -> bool {
    letters.iter().all(|&l| word.contains(l))
}
