use angrams::game::evaluate::{evaluate, Progress, Verdict, PROGRESS_TOKEN_VERSION};
use angrams::game::{Game, ValidationError};

fn two_word_game() -> Game {
    Game::new("bob", "art", vec!["rat".to_string(), "art".to_string()])
}

#[test]
fn evaluation_is_deterministic() {
    let game = two_word_game();
    let progress = Progress::start(game.id);
    let first = evaluate(&game, &progress, "rat");
    let second = evaluate(&game, &progress, "rat");
    assert_eq!(first, second);
}

#[test]
fn incorrect_guess_leaves_state_unchanged() {
    let game = two_word_game();
    let progress = Progress::start(game.id);
    assert_eq!(evaluate(&game, &progress, "dog"), Verdict::Incorrect);
    assert!(progress.found.is_empty());
}

#[test]
fn guesses_are_trimmed_and_lowercased() {
    let game = two_word_game();
    let progress = Progress::start(game.id);
    assert!(matches!(
        evaluate(&game, &progress, "  RAT "),
        Verdict::Partial { .. }
    ));
}

#[test]
fn already_guessed_wins_even_for_correct_words() {
    let game = two_word_game();
    let mut progress = Progress::start(game.id);
    progress.found.push("rat".to_string());
    assert_eq!(evaluate(&game, &progress, "rat"), Verdict::AlreadyGuessed);
}

#[test]
fn solved_exactly_when_the_found_set_covers_every_word() {
    let game = two_word_game();
    let progress = Progress::start(game.id);

    let Verdict::Partial { progress, remaining } = evaluate(&game, &progress, "rat") else {
        panic!("first correct guess should be partial");
    };
    assert_eq!(remaining, 1);
    assert_eq!(progress.found, vec!["rat"]);

    let Verdict::Solved { progress } = evaluate(&game, &progress, "art") else {
        panic!("second correct guess should solve");
    };
    assert_eq!(progress.found, vec!["rat", "art"]);
}

#[test]
fn oversized_tampered_tokens_cannot_panic_the_evaluator() {
    // A crafted token may hold more entries than the game has words; the
    // junk is discarded and the remaining count stays sound.
    let game = two_word_game();
    let mut progress = Progress::start(game.id);
    progress.found = vec!["a".to_string(), "b".to_string(), "c".to_string()];

    let Verdict::Partial { progress, remaining } = evaluate(&game, &progress, "rat") else {
        panic!("junk entries must not count toward completion");
    };
    assert_eq!(remaining, 1);
    assert_eq!(progress.found, vec!["rat"]);
}

#[test]
fn junk_entries_cannot_fake_an_early_solve() {
    let game = two_word_game();
    let mut progress = Progress::start(game.id);
    progress.found = vec!["junk".to_string()];
    assert!(matches!(
        evaluate(&game, &progress, "rat"),
        Verdict::Partial { remaining: 1, .. }
    ));
}

#[test]
fn duplicated_entries_count_once() {
    let game = Game::new(
        "bob",
        "art",
        vec!["rat".to_string(), "art".to_string(), "tar".to_string()],
    );
    let mut progress = Progress::start(game.id);
    progress.found = vec!["rat".to_string(), "rat".to_string()];
    assert!(matches!(
        evaluate(&game, &progress, "art"),
        Verdict::Partial { remaining: 1, .. }
    ));
}

#[test]
fn progress_token_round_trips() {
    let mut progress = Progress::start(42);
    progress.found.push("rat".to_string());
    let token = progress.encode();
    assert_eq!(Progress::decode(&token), Ok(progress));
}

#[test]
fn tampered_tokens_are_rejected() {
    assert_eq!(
        Progress::decode("not json at all"),
        Err(ValidationError::BadToken)
    );
}

#[test]
fn future_token_versions_are_rejected() {
    let future = PROGRESS_TOKEN_VERSION + 1;
    let token = format!("{{\"v\":{future},\"g\":1,\"w\":[]}}");
    assert_eq!(
        Progress::decode(&token),
        Err(ValidationError::TokenVersion(future))
    );
}

#[test]
fn words_with_commas_survive_the_token() {
    // The token is structured, so a pathological "word" containing the old
    // delimiter cannot split into two entries.
    let mut progress = Progress::start(7);
    progress.found.push("a,b".to_string());
    let decoded = Progress::decode(&progress.encode()).unwrap();
    assert_eq!(decoded.found, vec!["a,b"]);
}
