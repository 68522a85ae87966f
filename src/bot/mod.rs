//! # Command Surface
//!
//! Platform-agnostic command handling: plain text in, plain text (plus an
//! opaque progress token) out. A transport adapter owns HTTP, request
//! signing and any modal rendering; this layer only parses subcommands,
//! calls the engine and the store, and formats responses.
//!
//! Supported commands (the leading slash keyword is stripped by the
//! transport before we see the text):
//!
//! - `create <letters> [expiration] [private]`
//! - `list [private]`
//! - `guess <token|game-id> <word>`
//! - `stats <game-id>`
//! - `help`
//!
//! Both the create and solve paths persist before responding, so a
//! confirmation is never shown for state that failed to reach the store.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, error};

use crate::config::GamesConfig;
use crate::dictionary::DictionaryIndex;
use crate::game::discovery::discover;
use crate::game::evaluate::{evaluate, Progress, Verdict};
use crate::game::expiry::ExpirationSpec;
use crate::game::listing::list_playable;
use crate::game::{Game, ValidationError};
use crate::logutil::escape_log;
use crate::storage::{GameStore, StoreError};

/// Response to a single inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub text: String,
    /// Progress token the client must echo back with its next guess. `None`
    /// for commands with no continuing session.
    pub token: Option<String>,
}

impl CommandResponse {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            token: None,
        }
    }

    fn with_token(text: impl Into<String>, token: String) -> Self {
        Self {
            text: text.into(),
            token: Some(token),
        }
    }
}

const HELP_TEXT: &str = "Creating a game:\n\
1. Provide some letters to create the game with; duplicate letters are not necessary.\n\
2. Optionally add an expiration: a number followed by m, h, or d (e.g. 30m).\n\
3. Add 'private' to make the game playable only by you.\n\
4. You are shown how many words the game has, never the words themselves.\n\
\n\
Playing:\n\
1. Guess one word at a time; letters may be reused within a word.\n\
2. Correct guesses accumulate in your progress token - echo it back with each guess.\n\
3. Find every word to land on the game's leaderboard.";

/// Stateless command processor. One instance serves all users; every call
/// is a short, synchronous computation with no session kept in-process.
pub struct Bot {
    dictionary: Arc<DictionaryIndex>,
    store: Arc<GameStore>,
    games: GamesConfig,
}

impl Bot {
    pub fn new(dictionary: Arc<DictionaryIndex>, store: Arc<GameStore>, games: GamesConfig) -> Self {
        Self {
            dictionary,
            store,
            games,
        }
    }

    /// Dispatch one inbound command from `user`.
    pub fn handle_command(&self, user: &str, text: &str) -> CommandResponse {
        let mut parts = text.split_whitespace();
        let verb = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        debug!("command from {}: {}", user, escape_log(text));

        match verb {
            "create" => self.create(user, &args),
            "list" | "find" => self.list(user, args.first() == Some(&"private")),
            "guess" | "play" => self.guess(user, &args),
            "stats" => self.stats(&args),
            "help" | "instructions" | "rules" | "tips" => CommandResponse::text_only(HELP_TEXT),
            _ => CommandResponse::text_only(
                "Available commands:\n`create <letters> [expiration] [private]`\n\
                 `list [private]`\n`guess <token|game-id> <word>`\n`stats <game-id>`\n`help`",
            ),
        }
    }

    fn create(&self, user: &str, args: &[&str]) -> CommandResponse {
        let Some(raw_letters) = args.first() else {
            return Self::validation(ValidationError::EmptyLetters);
        };
        let mut private = false;
        let mut expiration: Option<String> = None;
        for arg in &args[1..] {
            if arg.eq_ignore_ascii_case("private") {
                private = true;
            } else {
                match arg.parse::<ExpirationSpec>() {
                    Ok(_) => expiration = Some((*arg).to_string()),
                    Err(err) => return Self::validation(err),
                }
            }
        }

        let (letters, words) = discover(&self.dictionary, raw_letters);
        if letters.is_empty() {
            return Self::validation(ValidationError::EmptyLetters);
        }
        if words.is_empty() {
            return Self::validation(ValidationError::NoWords(letters));
        }

        let word_count = words.len();
        let mut game = Game::new(user, &letters, words)
            .with_private(private)
            .with_expiration(expiration);
        match self.store.insert_game(&mut game) {
            Ok(id) => CommandResponse::text_only(format!(
                "You created game #{} from '{}' with {} words to find!",
                id, letters, word_count
            )),
            Err(err) => {
                error!("failed to store new game for {}: {}", user, err);
                CommandResponse::text_only("Could not save your game, please try again.")
            }
        }
    }

    fn list(&self, user: &str, want_private: bool) -> CommandResponse {
        let games = match self.store.all_games() {
            Ok(games) => games,
            Err(err) => {
                error!("failed to list games: {}", err);
                return CommandResponse::text_only("Could not load games, please try again.");
            }
        };
        let playable = list_playable(&games, user, want_private, Utc::now());
        if playable.is_empty() {
            return CommandResponse::text_only("Could not find any games");
        }

        let mut lines = Vec::new();
        for game in playable.iter().take(self.games.max_listed) {
            lines.push(format!(
                "#{} {} - {}, {} words, {} solved",
                game.id,
                game.letters.to_uppercase(),
                game.creator,
                game.words.len(),
                game.leaderboard.len()
            ));
        }
        CommandResponse::text_only(lines.join("\n"))
    }

    fn guess(&self, user: &str, args: &[&str]) -> CommandResponse {
        let (Some(target), Some(raw_guess)) = (args.first(), args.get(1)) else {
            return CommandResponse::text_only("Usage: `guess <token|game-id> <word>`");
        };

        // A fresh game id starts a new session; anything else must be a
        // token from a previous response.
        let progress = if let Ok(id) = target.parse::<u64>() {
            Progress::start(id)
        } else {
            match Progress::decode(target) {
                Ok(progress) => progress,
                Err(err) => return Self::validation(err),
            }
        };

        let game = match self.store.game(progress.game_id) {
            Ok(game) => game,
            Err(StoreError::NotFound(id)) => {
                return CommandResponse::text_only(format!("Game #{} not found", id));
            }
            Err(err) => {
                error!("failed to fetch game {}: {}", progress.game_id, err);
                return CommandResponse::text_only("Could not load the game, please try again.");
            }
        };
        if !game.playable_at(Utc::now()) {
            return CommandResponse::text_only(format!("Game #{} has ended", game.id));
        }

        let shout = raw_guess.trim().to_uppercase();
        match evaluate(&game, &progress, raw_guess) {
            Verdict::AlreadyGuessed => CommandResponse::with_token(
                format!("{} already guessed!", shout),
                progress.encode(),
            ),
            Verdict::Incorrect => CommandResponse::with_token(
                format!("{} is incorrect!", shout),
                progress.encode(),
            ),
            Verdict::Partial { progress, remaining } => CommandResponse::with_token(
                format!(
                    "{} is correct! {} words left.\nYou found: {}",
                    shout,
                    remaining,
                    progress.found.join(", ")
                ),
                progress.encode(),
            ),
            Verdict::Solved { progress } => {
                // Record before responding: never congratulate on a solve
                // the store did not accept.
                if let Err(err) = self.store.record_solve(game.id, user, Utc::now()) {
                    error!("failed to record solve of game {} by {}: {}", game.id, user, err);
                    return CommandResponse::with_token(
                        format!(
                            "{} is correct and completes the game, but the solve \
                             could not be recorded. Guess it once more to retry.",
                            shout
                        ),
                        progress.encode(),
                    );
                }
                CommandResponse::text_only(format!(
                    "Congrats, you found all {} words in {}'s game! \
                     You have been added to its leaderboard - see `stats {}`.",
                    game.words.len(),
                    game.creator,
                    game.id
                ))
            }
        }
    }

    fn stats(&self, args: &[&str]) -> CommandResponse {
        let Some(id) = args.first().and_then(|arg| arg.parse::<u64>().ok()) else {
            return CommandResponse::text_only("Usage: `stats <game-id>`");
        };
        let game = match self.store.game(id) {
            Ok(game) => game,
            Err(StoreError::NotFound(id)) => {
                return CommandResponse::text_only(format!("Game #{} not found", id));
            }
            Err(err) => {
                error!("failed to fetch game {}: {}", id, err);
                return CommandResponse::text_only("Could not load the game, please try again.");
            }
        };

        let mut lines = vec![format!(
            "{}'s game #{} ({}) - created {}",
            game.creator,
            game.id,
            game.letters.to_uppercase(),
            game.created_at.format("%-d %b %Y %-I:%M %p")
        )];
        if game.leaderboard.is_empty() {
            lines.push("Nobody has solved it yet.".to_string());
        } else {
            for (position, entry) in game.leaderboard.iter().enumerate() {
                lines.push(format!(
                    "{}) {} - {}",
                    position + 1,
                    entry.user,
                    entry.solved_at.format("%-d %b %Y %-I:%M:%S %p")
                ));
            }
        }
        CommandResponse::text_only(lines.join("\n"))
    }

    fn validation(err: ValidationError) -> CommandResponse {
        CommandResponse::text_only(err.to_string())
    }
}
