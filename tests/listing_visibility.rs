use angrams::game::listing::list_playable;
use angrams::game::{Game, LeaderboardEntry};
use chrono::{Duration, Utc};

fn game(creator: &str) -> Game {
    Game::new(creator, "art", vec!["art".to_string(), "rat".to_string()])
}

fn ids(games: &[Game]) -> Vec<u64> {
    games.iter().map(|g| g.id).collect()
}

#[test]
fn public_listing_shows_active_unsolved_games() {
    let now = Utc::now();
    let mut open = game("bob");
    open.id = 1;

    let mut solved = game("bob");
    solved.id = 2;
    solved.leaderboard.push(LeaderboardEntry {
        user: "alice".to_string(),
        solved_at: now,
    });

    let mut inactive = game("bob");
    inactive.id = 3;
    inactive.active = false;

    let games = vec![open, solved, inactive];
    assert_eq!(ids(&list_playable(&games, "alice", false, now)), vec![1]);
    // bob has not solved #2, so he still sees it
    assert_eq!(ids(&list_playable(&games, "bob", false, now)), vec![1, 2]);
}

#[test]
fn expired_games_are_hidden_from_public_listing() {
    let now = Utc::now();
    let mut fresh = game("bob");
    fresh.id = 1;
    fresh.expiration = Some("2h".to_string());

    let mut stale = game("bob");
    stale.id = 2;
    stale.expiration = Some("2h".to_string());
    stale.created_at = now - Duration::hours(3);

    let games = vec![fresh, stale];
    assert_eq!(ids(&list_playable(&games, "alice", false, now)), vec![1]);
}

#[test]
fn private_games_are_visible_only_to_their_creator() {
    let now = Utc::now();
    let mut bobs_private = game("bob").with_private(true);
    bobs_private.id = 1;
    let games = vec![bobs_private];

    assert!(list_playable(&games, "alice", false, now).is_empty());
    assert!(list_playable(&games, "alice", true, now).is_empty());
    assert_eq!(ids(&list_playable(&games, "bob", true, now)), vec![1]);
}

#[test]
fn private_listing_includes_already_solved_own_games() {
    let now = Utc::now();
    let mut own = game("bob").with_private(true);
    own.id = 1;
    own.leaderboard.push(LeaderboardEntry {
        user: "bob".to_string(),
        solved_at: now,
    });
    let games = vec![own];
    assert_eq!(ids(&list_playable(&games, "bob", true, now)), vec![1]);
}
