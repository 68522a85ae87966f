//! # Angrams - Anagram Word-Guessing Games for Chat Platforms
//!
//! Angrams is the core of a chat-platform bot: users create games from a set
//! of letters, discover games others have shared, guess words one at a time,
//! and land on a per-game leaderboard when they find every word.
//!
//! The chat platform itself is an external collaborator. Transport, request
//! signing and view rendering live in an adapter; this crate exposes a
//! plain-text command surface plus the engine and storage underneath it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use angrams::bot::Bot;
//! use angrams::config::Config;
//! use angrams::dictionary::DictionaryIndex;
//! use angrams::storage::GameStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let dictionary = Arc::new(DictionaryIndex::load(&config.dictionary.path).await?);
//!     let store = Arc::new(GameStore::open(&config.storage.data_dir)?);
//!     let bot = Bot::new(dictionary, store, config.games.clone());
//!
//!     let reply = bot.handle_command("alice", "create artsy 2h");
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`bot`] - command parsing and response formatting
//! - [`game`] - the game entity, word discovery, guess evaluation,
//!   expiration and listing logic
//! - [`dictionary`] - letter-indexed word corpus, loaded once at startup
//! - [`storage`] - sled-backed game record store
//! - [`config`] - TOML configuration management
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Command Surface │ ← parse, dispatch, format
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Game Engine   │ ← discovery, evaluation, expiry (pure)
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Game Store    │ ← sled persistence, atomic leaderboard upsert
//! └─────────────────┘
//! ```
//!
//! Per-player progress is never stored server-side: it rides in an opaque
//! token the client echoes back with each guess (see
//! [`game::evaluate::Progress`]).

pub mod bot;
pub mod config;
pub mod dictionary;
pub mod game;
pub mod logutil;
pub mod storage;
