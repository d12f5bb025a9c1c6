use crate::results::*;
use rand::seq::IteratorRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::io::BufRead;
use std::ops::Index;
use std::str::FromStr;
use tracing::debug;

/// A word made up of uppercase letters.
///
/// Words are case-insensitive: they are canonicalized to uppercase on construction, so `"Robot"`
/// and `"ROBOT"` are the same word. Any alphabetic character is supported, including letters
/// outside of `A-Z` such as `Ä`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Word {
    letters: Box<[char]>,
}

impl Word {
    /// Constructs a word from the given string, ignoring surrounding whitespace.
    ///
    /// ```
    /// use rs_wordle_colorings::Word;
    ///
    /// let word = Word::new("Robot").unwrap();
    /// assert_eq!(word.to_string(), "ROBOT");
    /// assert_eq!(word.len(), 5);
    /// ```
    pub fn new(word: &str) -> Result<Word, WordleError> {
        let mut letters = Vec::with_capacity(word.len());
        for letter in word.trim().chars() {
            if !letter.is_alphabetic() {
                return Err(InvalidInput::UnsupportedCharacter(letter).into());
            }
            // Letters without a single-character uppercase form, like `ß`, are kept as-is.
            let mut upper = letter.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(upper), None) => letters.push(upper),
                _ => letters.push(letter),
            }
        }
        if letters.is_empty() {
            return Err(WordleError::InvalidInput(InvalidInput::EmptyWord));
        }
        Ok(Word {
            letters: letters.into_boxed_slice(),
        })
    }

    /// The number of letters in this word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`, since words must have at least one letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.letters[index]
    }
}

impl AsRef<[char]> for Word {
    fn as_ref(&self) -> &[char] {
        &self.letters
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(word: &str) -> Result<Word, WordleError> {
        Word::new(word)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(word: String) -> Result<Word, WordleError> {
        Word::new(&word)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(word: &str) -> Result<Word, WordleError> {
        Word::new(word)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Contains all the valid words for this game, of any length.
///
/// Guesses are checked against the word bank before they are colored, and answers are chosen
/// from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    /// Sorted and deduplicated.
    words: Vec<Word>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Blank lines are skipped. If any line is not a
    /// valid word, this returns an error of kind [`io::ErrorKind::InvalidData`].
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> io::Result<Self> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            if line.trim().is_empty() {
                continue;
            }
            let word = Word::new(&line)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            words.push(word);
        }
        Ok(WordBank::from_words(words))
    }

    /// Constructs a new `WordBank` using the given words. Blank words are skipped.
    ///
    /// ```
    /// use rs_wordle_colorings::{Word, WordBank};
    ///
    /// let bank = WordBank::from_iterator(["robot", "booze", "Robot"]).unwrap();
    /// assert_eq!(bank.len(), 2);
    /// assert!(bank.contains(&Word::new("BOOZE").unwrap()));
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let words = words
            .into_iter()
            .filter(|word| !word.as_ref().trim().is_empty())
            .map(|word| Word::new(word.as_ref()))
            .collect::<Result<Vec<Word>, WordleError>>()?;
        Ok(WordBank::from_words(words))
    }

    fn from_words(mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();
        debug!(num_words = words.len(), "built word bank");
        WordBank { words }
    }

    /// Returns `true` iff the given word is in this bank.
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// All the words in this bank, in alphabetical order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words with exactly the given number of letters.
    pub fn words_of_length(&self, word_length: usize) -> impl Iterator<Item = &Word> + '_ {
        self.words
            .iter()
            .filter(move |word| word.len() == word_length)
    }

    /// Chooses a random word with the given number of letters, or `None` if there are no such
    /// words.
    pub fn choose_answer<R: Rng + ?Sized>(
        &self,
        word_length: usize,
        rng: &mut R,
    ) -> Option<&Word> {
        self.words_of_length(word_length).choose(rng)
    }
}
