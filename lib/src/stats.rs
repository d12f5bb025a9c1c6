use crate::data::Word;
use crate::game::GameId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::time::{Duration, SystemTime};

const DAY: Duration = Duration::from_secs(60 * 60 * 24);
const NUM_FAVORITE_WORDS: usize = 5;

/// A single guess submitted during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttemptRecord {
    pub attempt: Word,
    pub answer: Word,
    pub game_id: GameId,
    /// The 1-based attempt number this guess was made for.
    pub step: usize,
    /// Whether the guess was in the word bank.
    pub is_valid_attempt: bool,
    pub created_at: SystemTime,
}

/// How far back to look when computing stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatsWindow {
    /// The last 7 days.
    Week,
    /// The last 30 days.
    Month,
    #[default]
    AllTime,
}

impl StatsWindow {
    /// Returns the earliest time to include. Records must be strictly newer than this.
    fn cutoff(self, now: SystemTime) -> Option<SystemTime> {
        let length = match self {
            StatsWindow::Week => DAY * 7,
            StatsWindow::Month => DAY * 30,
            StatsWindow::AllTime => return None,
        };
        now.checked_sub(length)
    }
}

/// Summary statistics over a player's attempt history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    /// The number of distinct games with at least one attempt.
    pub games_played: usize,
    /// The step at which the most guesses were made. Ties go to the earliest step.
    pub most_attempted_step: Option<usize>,
    /// Up to five of the most frequently guessed valid words, with their counts.
    pub favorite_words: Vec<(Word, usize)>,
}

impl Stats {
    /// Computes stats from the records created within the given window before `now`.
    pub fn compute<'a, I>(records: I, window: StatsWindow, now: SystemTime) -> Stats
    where
        I: IntoIterator<Item = &'a AttemptRecord>,
    {
        let cutoff = window.cutoff(now);
        let mut game_ids: HashSet<&GameId> = HashSet::new();
        let mut count_per_step: BTreeMap<usize, usize> = BTreeMap::new();
        let mut count_per_word: BTreeMap<&Word, usize> = BTreeMap::new();

        for record in records {
            if cutoff.map_or(false, |cutoff| record.created_at <= cutoff) {
                continue;
            }
            game_ids.insert(&record.game_id);
            *count_per_step.entry(record.step).or_insert(0) += 1;
            if record.is_valid_attempt {
                *count_per_word.entry(&record.attempt).or_insert(0) += 1;
            }
        }

        // `max_by_key` keeps the last maximum, so iterate in reverse to prefer earlier steps.
        let most_attempted_step = count_per_step
            .iter()
            .rev()
            .max_by_key(|(_, count)| **count)
            .map(|(step, _)| *step);

        let mut favorite_words: Vec<(Word, usize)> = count_per_word
            .into_iter()
            .map(|(word, count)| (word.clone(), count))
            .collect();
        // The sort is stable and the words are already in alphabetical order.
        favorite_words.sort_by(|(_, a), (_, b)| b.cmp(a));
        favorite_words.truncate(NUM_FAVORITE_WORDS);

        Stats {
            games_played: game_ids.len(),
            most_attempted_step,
            favorite_words,
        }
    }
}
