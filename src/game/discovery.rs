//! Word discovery: given raw user letters, find every dictionary word that
//! can be spelled using only those letters (letters may repeat within a
//! word; the set defines the alphabet, not a budget).
//!
//! Candidate generation is bounded by the index layout: only the buckets of
//! the chosen letters are consulted, so a candidate's first character is
//! always one of those letters. That keeps the search proportional to the
//! letters picked instead of the whole corpus, and it is the published game
//! contract that existing games' word lists were generated under.

use std::collections::HashSet;

use crate::dictionary::DictionaryIndex;

/// Lowercase and deduplicate raw letters, keeping first-occurrence order.
/// Whitespace is dropped so "a b c" and "abc" describe the same set.
pub fn normalize_letters(raw: &str) -> String {
    let mut seen = HashSet::new();
    let mut letters = String::new();
    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            continue;
        }
        for lower in ch.to_lowercase() {
            if seen.insert(lower) {
                letters.push(lower);
            }
        }
    }
    letters
}

fn spellable(word: &str, letters: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| letters.contains(ch))
}

/// Normalize `raw` and enumerate every playable word. Returns the canonical
/// letter set (stored on the game and shown to the creator) alongside the
/// solution list. An empty set yields an empty list, not an error; letters
/// outside the corpus alphabet simply contribute no candidates.
pub fn discover(index: &DictionaryIndex, raw: &str) -> (String, Vec<String>) {
    let letters = normalize_letters(raw);
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for letter in letters.chars() {
        for word in index.lookup(letter) {
            if spellable(word, &letters) && seen.insert(word.clone()) {
                words.push(word.clone());
            }
        }
    }
    (letters, words)
}

#[cfg(test)]
mod tests {
    use super::normalize_letters;

    #[test]
    fn normalization_dedups_and_lowercases() {
        assert_eq!(normalize_letters("RreEdD"), "red");
        assert_eq!(normalize_letters("  a b\tc "), "abc");
        assert_eq!(normalize_letters(""), "");
    }
}
