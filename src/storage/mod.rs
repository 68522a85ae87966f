//! # Storage Module - Game Persistence Layer
//!
//! Sled-backed persistence for [`Game`] records. Records are bincode-encoded
//! with an explicit schema version so a future layout change can be detected
//! instead of silently misread.
//!
//! The store is the only mutable shared resource in the process. Leaderboard
//! updates use a compare-and-swap loop on the single game key, which gives
//! an atomic "add user to set" without read-modify-write races when two
//! players solve the same game concurrently.
//!
//! ```rust,no_run
//! use angrams::game::Game;
//! use angrams::storage::GameStore;
//!
//! fn main() -> Result<(), angrams::storage::StoreError> {
//!     let store = GameStore::open("./data/games")?;
//!     let mut game = Game::new("alice", "rat", vec!["rat".into(), "tar".into()]);
//!     let id = store.insert_game(&mut game)?;
//!     let fetched = store.game(id)?;
//!     assert_eq!(fetched.letters, "rat");
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use thiserror::Error;

use crate::game::{Game, LeaderboardEntry, GAME_SCHEMA_VERSION};

const TREE_GAMES: &str = "games";

/// Errors that can arise while interacting with the game store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Wrapper around bincode serialization and deserialization errors.
    #[error("serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Wrapper around IO errors (directory creation, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when fetching a game that is not present (stale id, tampered
    /// progress token).
    #[error("game {0} not found")]
    NotFound(u64),

    /// Returned when deserializing a record with an unexpected schema version.
    #[error("schema mismatch for game {id}: expected {expected}, got {found}")]
    SchemaMismatch { id: u64, expected: u8, found: u8 },
}

/// Helper builder so tests can easily create throwaway stores.
pub struct GameStoreBuilder {
    path: PathBuf,
}

impl GameStoreBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(self) -> Result<GameStore, StoreError> {
        GameStore::open(self.path)
    }
}

/// Sled-backed persistence for game records.
pub struct GameStore {
    db: sled::Db,
    games: sled::Tree,
}

impl GameStore {
    /// Open (or create) the store rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let games = db.open_tree(TREE_GAMES)?;
        Ok(Self { db, games })
    }

    // Big-endian keys keep tree iteration in id order.
    fn game_key(id: u64) -> [u8; 8] {
        id.to_be_bytes()
    }

    fn decode_game(bytes: &[u8]) -> Result<Game, StoreError> {
        let game: Game = bincode::deserialize(bytes)?;
        if game.schema_version != GAME_SCHEMA_VERSION {
            return Err(StoreError::SchemaMismatch {
                id: game.id,
                expected: GAME_SCHEMA_VERSION,
                found: game.schema_version,
            });
        }
        Ok(game)
    }

    /// Persist a newly created game, assigning its id. Returns the id.
    pub fn insert_game(&self, game: &mut Game) -> Result<u64, StoreError> {
        let id = self.db.generate_id()?;
        game.id = id;
        let encoded = bincode::serialize(game)?;
        self.games.insert(Self::game_key(id), encoded)?;
        self.games.flush()?;
        debug!(
            "stored game {} ({} words, creator {})",
            id,
            game.words.len(),
            game.creator
        );
        Ok(id)
    }

    /// Fetch a game by id.
    pub fn game(&self, id: u64) -> Result<Game, StoreError> {
        let bytes = self
            .games
            .get(Self::game_key(id))?
            .ok_or(StoreError::NotFound(id))?;
        Self::decode_game(&bytes)
    }

    /// All stored games, in id order.
    pub fn all_games(&self) -> Result<Vec<Game>, StoreError> {
        let mut games = Vec::new();
        for entry in self.games.iter() {
            let (_, bytes) = entry?;
            games.push(Self::decode_game(&bytes)?);
        }
        Ok(games)
    }

    /// Atomic read-modify-write of a single game record. Retries on CAS
    /// conflict so concurrent updates to the same game cannot be lost.
    fn update_game<F>(&self, id: u64, mut apply: F) -> Result<(), StoreError>
    where
        F: FnMut(&mut Game) -> bool,
    {
        loop {
            let current = self
                .games
                .get(Self::game_key(id))?
                .ok_or(StoreError::NotFound(id))?;
            let mut game = Self::decode_game(&current)?;
            if !apply(&mut game) {
                return Ok(());
            }
            let encoded = bincode::serialize(&game)?;
            match self
                .games
                .compare_and_swap(Self::game_key(id), Some(&current), Some(encoded))?
            {
                Ok(()) => {
                    self.games.flush()?;
                    return Ok(());
                }
                Err(_) => continue, // lost a race, re-read and retry
            }
        }
    }

    /// Add `user` to the game's leaderboard with set semantics: at most one
    /// entry per user, so a retried solve request is a no-op.
    pub fn record_solve(
        &self,
        id: u64,
        user: &str,
        solved_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.update_game(id, |game| {
            if game.solved_by(user) {
                return false;
            }
            game.leaderboard.push(LeaderboardEntry {
                user: user.to_string(),
                solved_at,
            });
            true
        })
    }

    /// Explicitly activate or deactivate a game.
    pub fn set_active(&self, id: u64, active: bool) -> Result<(), StoreError> {
        self.update_game(id, |game| {
            if game.active == active {
                return false;
            }
            game.active = active;
            true
        })
    }

    /// Number of stored games (for the `status` command).
    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}
