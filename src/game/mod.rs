//! # Game Domain
//!
//! The persisted [`Game`] entity plus the pure logic around it:
//!
//! - [`discovery`] - word discovery from a set of letters
//! - [`evaluate`] - per-guess state machine and client-held progress tokens
//! - [`expiry`] - human-entered expiration specs ("30m", "2h", "3d")
//! - [`listing`] - which games a given user may see and play
//!
//! Everything in this module is synchronous and store-free; persistence is
//! the [`crate::storage`] layer's job and the command surface in
//! [`crate::bot`] wires the two together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod discovery;
pub mod evaluate;
pub mod expiry;
pub mod listing;

pub const GAME_SCHEMA_VERSION: u8 = 1;

/// User-correctable input problems. These never mutate stored state; the
/// command surface renders them as plain messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no letters provided")]
    EmptyLetters,

    #[error("no words can be made from '{0}', try another combination")]
    NoWords(String),

    #[error("invalid expiration '{0}': use a number followed by m, h, or d")]
    BadExpiration(String),

    #[error("unreadable progress token")]
    BadToken,

    #[error("unsupported progress token version {0}")]
    TokenVersion(u8),
}

/// One user's first full solve of a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user: String,
    pub solved_at: DateTime<Utc>,
}

/// The central persisted entity. `words` is fixed at creation and never
/// recomputed; `leaderboard` is append-only with at most one entry per user
/// (enforced by the store's upsert, not here).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub schema_version: u8,
    /// Assigned by the store on insert; 0 until then.
    pub id: u64,
    pub creator: String,
    /// Canonical letter set: lowercased, deduplicated, first-occurrence order.
    pub letters: String,
    pub words: Vec<String>,
    pub active: bool,
    pub private: bool,
    pub created_at: DateTime<Utc>,
    /// Human-entered duration spec relative to `created_at`; `None` means the
    /// game never expires.
    pub expiration: Option<String>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Game {
    pub fn new(creator: &str, letters: &str, words: Vec<String>) -> Self {
        Self {
            schema_version: GAME_SCHEMA_VERSION,
            id: 0,
            creator: creator.to_string(),
            letters: letters.to_string(),
            words,
            active: true,
            private: false,
            created_at: Utc::now(),
            expiration: None,
            leaderboard: Vec::new(),
        }
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn with_expiration(mut self, spec: Option<String>) -> Self {
        self.expiration = spec.filter(|s| !s.trim().is_empty());
        self
    }

    /// Whether `user` already appears on this game's leaderboard.
    pub fn solved_by(&self, user: &str) -> bool {
        self.leaderboard.iter().any(|entry| entry.user == user)
    }

    /// Playable right now: active and not past its expiration.
    pub fn playable_at(&self, now: DateTime<Utc>) -> bool {
        self.active && !expiry::is_expired(self.expiration.as_deref(), self.created_at, now)
    }
}
