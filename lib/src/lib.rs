//! A coloring and deduction engine for Wordle-style puzzles.
//!
//! The core of this crate is [`compute_colorings`], which takes an answer, the attempts made so
//! far, and any revealed hint locations, and determines:
//!
//! * the verdict for each letter of each attempt,
//! * the best verdict seen for each letter, for coloring a keyboard, and
//! * which letters are known with certainty at each location.
//!
//! [`Game`] wraps the engine with the rest of a playable game: a [`WordBank`] to check guesses
//! against, a limited number of attempts, and randomly revealed hints.

mod data;
mod engine;
mod game;
mod results;
mod stats;

pub use data::Word;
pub use data::WordBank;
pub use engine::*;
pub use game::*;
pub use results::*;
pub use stats::*;

#[cfg(doctest)]
#[doc = include_str!("../../README.md")]
struct ReadmeDoctests;
