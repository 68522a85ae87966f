//! Guess evaluation and the client-held progress token.
//!
//! There is no server-side session: everything a player has found so far
//! travels in an opaque token the client echoes back with each guess. The
//! token is a small versioned JSON struct rather than a delimited string so
//! that words can never collide with a separator.
//!
//! [`evaluate`] is a pure function of `(game, progress, guess)` — no clock,
//! no store access — so concurrent players of the same game can never
//! contaminate each other's state.

use serde::{Deserialize, Serialize};

use crate::game::{Game, ValidationError};

pub const PROGRESS_TOKEN_VERSION: u8 = 1;

/// Words one player has found so far in one game. Created on the first
/// guess, extended on each correct guess, discarded once solved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    #[serde(rename = "v")]
    pub version: u8,
    #[serde(rename = "g")]
    pub game_id: u64,
    #[serde(rename = "w")]
    pub found: Vec<String>,
}

impl Progress {
    /// Fresh token for a player starting on `game_id`.
    pub fn start(game_id: u64) -> Self {
        Self {
            version: PROGRESS_TOKEN_VERSION,
            game_id,
            found: Vec::new(),
        }
    }

    /// Parse a token echoed back by the client. A stale or tampered token
    /// is a user-visible validation failure, never a crash.
    pub fn decode(token: &str) -> Result<Self, ValidationError> {
        let progress: Self =
            serde_json::from_str(token).map_err(|_| ValidationError::BadToken)?;
        if progress.version != PROGRESS_TOKEN_VERSION {
            return Err(ValidationError::TokenVersion(progress.version));
        }
        Ok(progress)
    }

    /// Serialize for the client to echo back. Infallible for this shape.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("progress token serializes")
    }
}

/// Outcome of evaluating a single guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The word is already in the player's found list (checked before
    /// dictionary membership, so it wins even for correct words).
    AlreadyGuessed,
    /// Not one of the game's words.
    Incorrect,
    /// Correct, with words still left to find.
    Partial { progress: Progress, remaining: usize },
    /// Correct and the found list now covers every word. The caller must
    /// record the solve before responding to the player.
    Solved { progress: Progress },
}

/// Advance one player's state machine by a single guess.
///
/// The token is client-held, so its found list cannot be trusted: only
/// entries that are actually words of this game count toward completion,
/// once each. Junk or duplicated entries in a tampered token are dropped
/// from the returned progress rather than padding the solved check.
pub fn evaluate(game: &Game, progress: &Progress, guess: &str) -> Verdict {
    let guess = guess.trim().to_lowercase();
    if progress.found.iter().any(|word| *word == guess) {
        return Verdict::AlreadyGuessed;
    }
    if !game.words.iter().any(|word| *word == guess) {
        return Verdict::Incorrect;
    }

    let mut found: Vec<String> = Vec::new();
    for word in &progress.found {
        if game.words.contains(word) && !found.contains(word) {
            found.push(word.clone());
        }
    }
    found.push(guess);
    let next = Progress {
        version: progress.version,
        game_id: progress.game_id,
        found,
    };

    // found is now a strict subset-plus-guess of the word list, so this
    // count can neither overshoot nor underflow.
    if next.found.len() == game.words.len() {
        Verdict::Solved { progress: next }
    } else {
        let remaining = game.words.len() - next.found.len();
        Verdict::Partial {
            progress: next,
            remaining,
        }
    }
}
