//! # Dictionary Index
//!
//! Loads the word corpus once at startup and serves letter-keyed lookups for
//! the rest of the process lifetime. The corpus is a JSON object mapping a
//! single lowercase letter to the list of dictionary words beginning with
//! that letter:
//!
//! ```json
//! { "a": ["art", "artsy"], "r": ["rat"], "t": ["tar", "tart"] }
//! ```
//!
//! The index is immutable after [`DictionaryIndex::load`] returns; callers
//! share it behind an `Arc` and concurrent lookups never block. A missing or
//! malformed corpus is fatal at startup — there is no per-request recovery
//! from a dictionary that never loaded.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the word corpus. Both variants are fatal to
/// the process: the service cannot create or evaluate games without words.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read dictionary file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dictionary file '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawCorpus(HashMap<String, Vec<String>>);

/// Immutable letter → word-list mapping.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    by_letter: HashMap<char, Vec<String>>,
    word_count: usize,
}

impl DictionaryIndex {
    /// Read and parse the corpus at `path`. Words and keys are lowercased on
    /// the way in so lookups can assume canonical form.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path_ref = path.as_ref();
        let display = path_ref.display().to_string();
        let content = tokio::fs::read_to_string(path_ref)
            .await
            .map_err(|source| DictionaryError::Io {
                path: display.clone(),
                source,
            })?;
        let raw: RawCorpus =
            serde_json::from_str(&content).map_err(|source| DictionaryError::Malformed {
                path: display,
                source,
            })?;

        let mut by_letter: HashMap<char, Vec<String>> = HashMap::new();
        for (key, words) in raw.0 {
            let Some(letter) = key.chars().next() else {
                continue;
            };
            let bucket = by_letter
                .entry(letter.to_ascii_lowercase())
                .or_default();
            for word in words {
                let word = word.trim().to_lowercase();
                if !word.is_empty() {
                    bucket.push(word);
                }
            }
        }
        let word_count = by_letter.values().map(Vec::len).sum();
        Ok(Self {
            by_letter,
            word_count,
        })
    }

    /// Build an index directly from a letter → words map. Used by tests and
    /// embedded corpora; applies the same lowercasing as [`Self::load`].
    pub fn from_map(map: HashMap<char, Vec<String>>) -> Self {
        // Merge rather than collect: 'R' and 'r' land in the same bucket,
        // matching what load() does with duplicate keys.
        let mut by_letter: HashMap<char, Vec<String>> = HashMap::new();
        for (letter, words) in map {
            let bucket = by_letter.entry(letter.to_ascii_lowercase()).or_default();
            for word in words {
                let word = word.trim().to_lowercase();
                if !word.is_empty() {
                    bucket.push(word);
                }
            }
        }
        let word_count = by_letter.values().map(Vec::len).sum();
        Self {
            by_letter,
            word_count,
        }
    }

    /// Words beginning with `letter`. Unknown letters yield an empty slice,
    /// never an error.
    pub fn lookup(&self, letter: char) -> &[String] {
        self.by_letter
            .get(&letter.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of words across all letters.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_total() {
        let index = DictionaryIndex::from_map(HashMap::from([
            ('R', vec!["Rat".to_string(), " ratty ".to_string()]),
            ('t', vec!["tar".to_string()]),
        ]));
        assert_eq!(index.lookup('r'), &["rat".to_string(), "ratty".to_string()]);
        assert_eq!(index.lookup('R'), index.lookup('r'));
        assert!(index.lookup('z').is_empty());
        assert_eq!(index.word_count(), 3);
    }

    #[test]
    fn keys_differing_only_in_case_share_a_bucket() {
        let index = DictionaryIndex::from_map(HashMap::from([
            ('R', vec!["rat".to_string()]),
            ('r', vec!["roar".to_string()]),
        ]));
        let mut bucket = index.lookup('r').to_vec();
        bucket.sort();
        assert_eq!(bucket, vec!["rat".to_string(), "roar".to_string()]);
        assert_eq!(index.word_count(), 2);
    }
}
