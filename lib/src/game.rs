use crate::data::*;
use crate::engine::*;
use crate::results::*;
use crate::stats::AttemptRecord;
use rand::seq::IteratorRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Configures the shape of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// The number of letters in the answer and in every guess.
    pub word_length: usize,
    /// The number of accepted guesses allowed before the game is lost.
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_length: 5,
            max_attempts: 5,
        }
    }
}

impl GameConfig {
    /// Checks that a game can be played with this config.
    pub fn validate(&self) -> Result<(), WordleError> {
        if self.word_length == 0 {
            return Err(WordleError::InvalidConfig("word length must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(WordleError::InvalidConfig(
                "max attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Whether the game is still being played, or how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Playing,
    /// The answer was guessed.
    Won,
    /// Every attempt was used without guessing the answer.
    Lost,
}

/// A random identifier for a single game, used to group attempt records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct GameId(String);

impl GameId {
    const NUM_PARTS: usize = 24;

    /// Generates a new ID made of 24 random 32-bit values, each formatted as 8 hex digits and
    /// separated by dashes.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> GameId {
        let parts: Vec<String> = (0..GameId::NUM_PARTS)
            .map(|_| format!("{:08x}", rng.gen::<u32>()))
            .collect();
        GameId(parts.join("-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        GameId(id.to_string())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Holds the state of a single game: the answer, the accepted attempts, and the revealed hints.
///
/// All colorings are recomputed from this history by [`compute_colorings`], so the game never
/// stores them.
///
/// ```
/// use rs_wordle_colorings::*;
///
/// let bank = WordBank::from_iterator(["booze", "robot", "tower"])?;
/// let mut game = Game::new(Word::new("robot")?, GameConfig::default())?;
///
/// let coloring = game.make_attempt("booze", &bank)?;
/// assert_eq!(coloring.to_string(), "ygy..");
/// assert_eq!(game.remaining_attempts(), 4);
///
/// game.make_attempt("robot", &bank)?;
/// assert_eq!(game.state(), GameState::Won);
/// # Ok::<(), WordleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    config: GameConfig,
    answer: Word,
    attempts: Vec<Word>,
    hints: BTreeSet<usize>,
    state: GameState,
    records: Vec<AttemptRecord>,
}

impl Game {
    /// Starts a game with the given answer and a random ID.
    pub fn new(answer: Word, config: GameConfig) -> Result<Game, WordleError> {
        Game::with_id(GameId::random(&mut rand::thread_rng()), answer, config)
    }

    /// Starts a game with the given ID and answer.
    pub fn with_id(id: GameId, answer: Word, config: GameConfig) -> Result<Game, WordleError> {
        config.validate()?;
        if answer.len() != config.word_length {
            return Err(InvalidInput::WordLength {
                expected: config.word_length,
                actual: answer.len(),
            }
            .into());
        }
        debug!(game_id = %id, ?config, "starting game");
        Ok(Game {
            id,
            config,
            answer,
            attempts: Vec::new(),
            hints: BTreeSet::new(),
            state: GameState::Playing,
            records: Vec::new(),
        })
    }

    /// Starts a game with an answer chosen at random from the word bank.
    pub fn with_random_answer<R: Rng + ?Sized>(
        bank: &WordBank,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Game, WordleError> {
        config.validate()?;
        let answer = bank
            .choose_answer(config.word_length, rng)
            .ok_or(WordleError::NoWordsOfLength(config.word_length))?
            .clone();
        Game::with_id(GameId::random(rng), answer, config)
    }

    /// Submits a guess, and returns its coloring if it was accepted.
    ///
    /// The guess is accepted only if it has the right length and is in the word bank. Guesses
    /// that are in the right format but aren't known words are still recorded in
    /// [`Game::records`], but don't use up an attempt.
    pub fn make_attempt(
        &mut self,
        guess: &str,
        bank: &WordBank,
    ) -> Result<AttemptColoring, WordleError> {
        if self.state != GameState::Playing {
            return Err(WordleError::GameOver);
        }
        let guess = Word::new(guess)?;
        self.submit(guess, bank)
    }

    fn submit(&mut self, guess: Word, bank: &WordBank) -> Result<AttemptColoring, WordleError> {
        let coloring = color_attempt(&self.answer, &guess)?;
        let is_valid_attempt = bank.contains(&guess);
        self.records.push(AttemptRecord {
            attempt: guess.clone(),
            answer: self.answer.clone(),
            game_id: self.id.clone(),
            step: self.attempts.len() + 1,
            is_valid_attempt,
            created_at: SystemTime::now(),
        });
        if !is_valid_attempt {
            warn!(game_id = %self.id, %guess, "rejected guess not in the word bank");
            return Err(WordleError::NotInWordBank(guess.to_string()));
        }

        self.attempts.push(guess);
        if coloring.is_solved() {
            self.state = GameState::Won;
        } else if self.attempts.len() >= self.config.max_attempts {
            self.state = GameState::Lost;
        }
        info!(
            game_id = %self.id,
            step = self.attempts.len(),
            %coloring,
            state = ?self.state,
            "accepted guess"
        );
        Ok(coloring)
    }

    /// Reveals a random location whose letter isn't already known, and returns its index.
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, WordleError> {
        if self.state != GameState::Playing {
            return Err(WordleError::GameOver);
        }
        let index = self
            .colorings()
            .deduced_slots
            .unknown_positions()
            .choose(rng)
            .ok_or(WordleError::NothingToReveal)?;
        self.hints.insert(index);
        info!(game_id = %self.id, index, "revealed hint");
        Ok(index)
    }

    /// Computes the colorings for the current history.
    pub fn colorings(&self) -> Colorings {
        colorings_for_history(&self.answer, &self.attempts, self.hints.iter().copied())
    }

    /// Starts the next game with a new random answer.
    ///
    /// This game's answer is submitted as the first guess of the new game, as long as it's in the
    /// word bank and the new game allows more than one attempt.
    pub fn play_again<R: Rng + ?Sized>(
        &self,
        bank: &WordBank,
        rng: &mut R,
    ) -> Result<Game, WordleError> {
        let mut next = Game::with_random_answer(bank, self.config, rng)?;
        if self.config.max_attempts > 1 && bank.contains(&self.answer) {
            next.submit(self.answer.clone(), bank)?;
        }
        Ok(next)
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// The accepted guesses, in the order they were made.
    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    pub fn hints(&self) -> &BTreeSet<usize> {
        &self.hints
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts.len())
    }

    /// Every well-formed guess submitted to this game, including those rejected by the word bank.
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }
}
