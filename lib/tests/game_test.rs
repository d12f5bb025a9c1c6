#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_colorings::*;

use std::result::Result;

fn create_word_bank() -> WordBank {
    WordBank::from_iterator(vec![
        "alpha", "allot", "begot", "below", "booze", "endow", "ingot", "robot", "tower", "cat",
        "act",
    ])
    .unwrap()
}

fn create_game(answer: &str) -> Game {
    Game::with_id(
        GameId::from("test"),
        Word::new(answer).unwrap(),
        GameConfig::default(),
    )
    .unwrap()
}

#[test]
fn win_game() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = create_game("robot");

    let coloring = game.make_attempt("booze", &bank)?;
    assert_eq!(coloring.to_string(), "ygy..");
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.remaining_attempts(), 4);

    let coloring = game.make_attempt("Robot", &bank)?;
    assert!(coloring.is_solved());
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.remaining_attempts(), 3);
    assert_eq!(game.colorings().deduced_slots.to_string(), "ROBOT");
    Ok(())
}

#[test]
fn lose_game() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = create_game("robot");

    for guess in ["alpha", "allot", "begot", "below"] {
        game.make_attempt(guess, &bank)?;
        assert_eq!(game.state(), GameState::Playing);
    }
    game.make_attempt("endow", &bank)?;

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.remaining_attempts(), 0);
    assert_matches!(
        game.make_attempt("robot", &bank),
        Err(WordleError::GameOver)
    );
    assert_eq!(game.attempts().len(), 5);
    Ok(())
}

#[test]
fn winning_on_last_attempt_is_a_win() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = Game::with_id(
        GameId::from("test"),
        Word::new("robot")?,
        GameConfig {
            word_length: 5,
            max_attempts: 2,
        },
    )?;

    game.make_attempt("tower", &bank)?;
    game.make_attempt("robot", &bank)?;

    assert_eq!(game.state(), GameState::Won);
    Ok(())
}

#[test]
fn unknown_word_does_not_use_an_attempt() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = create_game("robot");

    assert_matches!(
        game.make_attempt("roobt", &bank),
        Err(WordleError::NotInWordBank(word)) if word == "ROOBT"
    );

    assert!(game.attempts().is_empty());
    assert_eq!(game.remaining_attempts(), 5);
    assert_eq!(game.records().len(), 1);
    assert!(!game.records()[0].is_valid_attempt);
    assert_eq!(game.records()[0].step, 1);
    Ok(())
}

#[test]
fn malformed_guesses_are_rejected() {
    let bank = create_word_bank();
    let mut game = create_game("robot");

    assert_matches!(
        game.make_attempt("cat", &bank),
        Err(WordleError::InvalidInput(InvalidInput::WordLength {
            expected: 5,
            actual: 3
        }))
    );
    assert_matches!(
        game.make_attempt("rob0t", &bank),
        Err(WordleError::InvalidInput(
            InvalidInput::UnsupportedCharacter('0')
        ))
    );
    assert!(game.records().is_empty());
    assert!(game.attempts().is_empty());
}

#[test]
fn records_track_steps() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut game = create_game("robot");

    game.make_attempt("booze", &bank)?;
    let _ = game.make_attempt("zzzzz", &bank);
    game.make_attempt("tower", &bank)?;

    let steps: Vec<(usize, bool)> = game
        .records()
        .iter()
        .map(|record| (record.step, record.is_valid_attempt))
        .collect();
    assert_eq!(steps, vec![(1, true), (2, false), (2, true)]);
    assert!(game
        .records()
        .iter()
        .all(|record| record.game_id == *game.id() && record.answer == *game.answer()));
    Ok(())
}

#[test]
fn reveal_hint_fills_unknown_slots() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = create_game("robot");
    game.make_attempt("tower", &bank)?;
    assert_eq!(game.colorings().deduced_slots.to_string(), "_O___");

    let mut revealed = Vec::new();
    for _ in 0..4 {
        let index = game.reveal_hint(&mut rng)?;
        assert_ne!(index, 1);
        assert!(!revealed.contains(&index));
        revealed.push(index);
    }

    assert_eq!(game.hints().len(), 4);
    assert!(game.colorings().deduced_slots.is_complete());
    assert_matches!(
        game.reveal_hint(&mut rng),
        Err(WordleError::NothingToReveal)
    );
    assert_eq!(game.state(), GameState::Playing);
    Ok(())
}

#[test]
fn reveal_hint_after_game_over() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = create_game("robot");

    game.make_attempt("robot", &bank)?;

    assert_matches!(game.reveal_hint(&mut rng), Err(WordleError::GameOver));
    Ok(())
}

#[test]
fn hints_show_up_in_colorings_before_any_attempt() -> Result<(), WordleError> {
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = create_game("robot");

    let index = game.reveal_hint(&mut rng)?;

    let colorings = game.colorings();
    assert_eq!(colorings.deduced_slots.get(index), Some(game.answer()[index]));
    assert_eq!(colorings.deduced_slots.unknown_positions().count(), 4);
    Ok(())
}

#[test]
fn random_answer_uses_configured_length() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(5);
    let config = GameConfig {
        word_length: 3,
        max_attempts: 6,
    };

    let game = Game::with_random_answer(&bank, config, &mut rng)?;

    assert_eq!(game.answer().len(), 3);
    assert!(bank.contains(game.answer()));
    assert_eq!(game.remaining_attempts(), 6);
    Ok(())
}

#[test]
fn random_answer_without_words_of_length() {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(5);
    let config = GameConfig {
        word_length: 4,
        max_attempts: 6,
    };

    assert_matches!(
        Game::with_random_answer(&bank, config, &mut rng),
        Err(WordleError::NoWordsOfLength(4))
    );
}

#[test]
fn play_again_opens_with_previous_answer() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(8);
    let mut game = create_game("robot");
    game.make_attempt("robot", &bank)?;

    let next = game.play_again(&bank, &mut rng)?;

    assert_ne!(next.id(), game.id());
    assert_eq!(next.attempts(), &[Word::new("robot")?]);
    assert_eq!(next.records().len(), 1);
    assert_eq!(next.config(), game.config());
    if next.answer() == game.answer() {
        assert_eq!(next.state(), GameState::Won);
    } else {
        assert_eq!(next.state(), GameState::Playing);
        assert_eq!(next.remaining_attempts(), 4);
    }
    Ok(())
}

#[test]
fn stats_from_game_records() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut first = create_game("robot");
    first.make_attempt("tower", &bank)?;
    first.make_attempt("robot", &bank)?;
    let mut second = Game::with_id(
        GameId::from("other"),
        Word::new("below")?,
        GameConfig::default(),
    )?;
    second.make_attempt("tower", &bank)?;

    let stats = Stats::compute(
        first.records().iter().chain(second.records()),
        StatsWindow::Week,
        std::time::SystemTime::now(),
    );

    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.most_attempted_step, Some(1));
    assert_eq!(stats.favorite_words[0], (Word::new("tower")?, 2));
    Ok(())
}

#[test]
fn play_again_with_single_attempt_leaves_it_to_the_player() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["robot", "tower"])?;
    let config = GameConfig {
        word_length: 5,
        max_attempts: 1,
    };
    let mut rng = StdRng::seed_from_u64(2);
    let mut game = Game::with_id(GameId::from("test"), Word::new("robot")?, config)?;
    game.make_attempt("tower", &bank)?;
    assert_eq!(game.state(), GameState::Lost);

    for _ in 0..5 {
        let next = game.play_again(&bank, &mut rng)?;

        assert_eq!(next.state(), GameState::Playing);
        assert!(next.attempts().is_empty());
        assert!(next.records().is_empty());
        assert_eq!(next.remaining_attempts(), 1);
    }
    Ok(())
}
