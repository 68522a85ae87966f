//! Game discovery filters: which games should a user be offered?

use chrono::{DateTime, Utc};

use crate::game::Game;

/// Select the games `for_user` may play.
///
/// Public mode (`want_private == false`): active, non-private games the user
/// has not already solved, excluding anything past its expiration. Private
/// mode: the user's own private games regardless of solved status — nobody
/// else's private games are ever listed, in either mode.
pub fn list_playable(
    games: &[Game],
    for_user: &str,
    want_private: bool,
    now: DateTime<Utc>,
) -> Vec<Game> {
    games
        .iter()
        .filter(|game| {
            if want_private {
                game.private && game.creator == for_user
            } else {
                !game.private && game.playable_at(now) && !game.solved_by(for_user)
            }
        })
        .cloned()
        .collect()
}
