#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// The verdict for a single letter of a guess.
///
/// Verdicts are ordered from least to most informative, so `Wrong < SemiCorrect < Correct`. The
/// keyboard colorings rely on this ordering to only ever upgrade a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterVerdict {
    /// The letter is not in the answer, or every copy of it has already been matched.
    Wrong,
    /// The letter is in the answer, but somewhere else.
    SemiCorrect,
    /// The letter is in the answer at this exact location.
    Correct,
}

impl LetterVerdict {
    /// A single-character marker for this verdict: `g` for correct, `y` for semi-correct, and `.`
    /// for wrong.
    pub fn marker(self) -> char {
        match self {
            LetterVerdict::Correct => 'g',
            LetterVerdict::SemiCorrect => 'y',
            LetterVerdict::Wrong => '.',
        }
    }
}

/// The verdicts for each letter of one attempt, in the same order as the attempt's letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttemptColoring {
    verdicts: Vec<LetterVerdict>,
}

impl AttemptColoring {
    pub(crate) fn new(verdicts: Vec<LetterVerdict>) -> AttemptColoring {
        AttemptColoring { verdicts }
    }

    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.verdicts
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterVerdict> {
        self.verdicts.iter()
    }

    /// Returns `true` iff every letter was correct, i.e. the attempt was the answer.
    pub fn is_solved(&self) -> bool {
        self.verdicts
            .iter()
            .all(|verdict| *verdict == LetterVerdict::Correct)
    }

    /// Returns `true` iff at least one letter received the given verdict.
    pub fn contains(&self, verdict: LetterVerdict) -> bool {
        self.verdicts.contains(&verdict)
    }
}

impl Index<usize> for AttemptColoring {
    type Output = LetterVerdict;

    fn index(&self, index: usize) -> &LetterVerdict {
        &self.verdicts[index]
    }
}

impl<'a> IntoIterator for &'a AttemptColoring {
    type Item = &'a LetterVerdict;
    type IntoIter = std::slice::Iter<'a, LetterVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.verdicts.iter()
    }
}

impl fmt::Display for AttemptColoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.verdicts {
            write!(f, "{}", verdict.marker())?;
        }
        Ok(())
    }
}

/// The best verdict seen so far for each letter that has been guessed.
///
/// Letters that were never guessed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyboardColorings {
    by_letter: BTreeMap<char, LetterVerdict>,
}

impl KeyboardColorings {
    /// Records a verdict for the given letter.
    ///
    /// The stored verdict is only replaced if the new one ranks higher, so `Correct` is never
    /// downgraded and `Wrong` is only stored for a letter without an existing entry.
    pub(crate) fn upgrade(&mut self, letter: char, verdict: LetterVerdict) {
        match self.by_letter.entry(letter) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(verdict);
            }
            btree_map::Entry::Occupied(mut entry) => {
                if verdict > *entry.get() {
                    entry.insert(verdict);
                }
            }
        }
    }

    /// Returns the verdict for the given letter, if it has been guessed. The letter is matched
    /// case-insensitively.
    pub fn get(&self, letter: char) -> Option<LetterVerdict> {
        let mut upper = letter.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(upper), None) => self.by_letter.get(&upper).copied(),
            _ => self.by_letter.get(&letter).copied(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_letter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_letter.is_empty()
    }

    /// Iterates over the guessed letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        self.by_letter
            .iter()
            .map(|(letter, verdict)| (*letter, *verdict))
    }
}

/// The letters known with certainty at each location, either from a correct guess or from a hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeducedSlots {
    slots: Vec<Option<char>>,
}

impl DeducedSlots {
    pub(crate) fn new(word_length: usize) -> DeducedSlots {
        DeducedSlots {
            slots: vec![None; word_length],
        }
    }

    pub(crate) fn reveal(&mut self, index: usize, letter: char) {
        self.slots[index] = Some(letter);
    }

    /// Returns the known letter at the given location, if there is one.
    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` iff every location is known.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Iterates over the locations that are still unknown, in ascending order.
    pub fn unknown_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_none().then_some(index))
    }
}

impl fmt::Display for DeducedSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or('_'))?;
        }
        Ok(())
    }
}

/// Everything the engine derives from an answer, its attempts, and the revealed hints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Colorings {
    /// One coloring per attempt, in the same order as the attempts.
    pub attempt_colorings: Vec<AttemptColoring>,
    pub keyboard_colorings: KeyboardColorings,
    pub deduced_slots: DeducedSlots,
}

/// Describes why a word, attempt, or hint was rejected.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum InvalidInput {
    #[error("words must contain at least one letter")]
    EmptyWord,
    #[error("'{0}' is not a letter")]
    UnsupportedCharacter(char),
    #[error("expected a word with {expected} letters, but it had {actual}")]
    WordLength { expected: usize, actual: usize },
    #[error("hint index {index} is out of range for a word with {word_length} letters")]
    HintOutOfRange { index: usize, word_length: usize },
}

/// Indicates that an error occurred while coloring attempts or playing a game.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// The caller supplied a malformed word, attempt, or hint.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// The guess is well-formed, but is not a known word.
    #[error("'{0}' is not in the word bank")]
    NotInWordBank(String),
    /// An answer was requested for a word length that the word bank doesn't contain.
    #[error("the word bank has no words with {0} letters")]
    NoWordsOfLength(usize),
    /// The game has already been won or lost.
    #[error("the game is already over")]
    GameOver,
    /// A hint was requested, but every letter is already known.
    #[error("every letter is already known")]
    NothingToReveal,
    #[error("invalid game config: {0}")]
    InvalidConfig(&'static str),
}
