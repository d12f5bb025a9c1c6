use crate::data::Word;
use crate::results::*;
use std::borrow::Borrow;
use std::iter::zip;
use tracing::{debug, trace};

/// Colors every attempt against the answer, and aggregates the results into keyboard colorings
/// and deduced slots.
///
/// Every attempt must have the same length as the answer, and every hint must be a valid index
/// into the answer. The whole call is rejected with [`WordleError::InvalidInput`] otherwise.
///
/// The result depends only on the arguments, so this can be called again after every change to
/// the attempts or hints.
///
/// ```
/// use rs_wordle_colorings::*;
///
/// let answer = Word::new("robot")?;
/// let attempts = vec![Word::new("booze")?, Word::new("robot")?];
///
/// let hints = [0usize];
/// let colorings = compute_colorings(&answer, &attempts, hints)?;
///
/// assert_eq!(colorings.attempt_colorings[0].to_string(), "ygy..");
/// assert!(colorings.attempt_colorings[1].is_solved());
/// assert_eq!(colorings.keyboard_colorings.get('O'), Some(LetterVerdict::Correct));
/// assert_eq!(colorings.deduced_slots.to_string(), "ROBOT");
/// # Ok::<(), WordleError>(())
/// ```
pub fn compute_colorings<H>(
    answer: &Word,
    attempts: &[Word],
    hints: H,
) -> Result<Colorings, WordleError>
where
    H: IntoIterator,
    H::Item: Borrow<usize>,
{
    let hints: Vec<usize> = hints.into_iter().map(|hint| *hint.borrow()).collect();
    for attempt in attempts {
        check_same_length(answer, attempt)?;
    }
    if let Some(&index) = hints.iter().find(|&&index| index >= answer.len()) {
        return Err(InvalidInput::HintOutOfRange {
            index,
            word_length: answer.len(),
        }
        .into());
    }
    Ok(colorings_for_history(answer, attempts, hints))
}

/// Determines the coloring of a single `attempt` against the given `answer`.
///
/// ```
/// use rs_wordle_colorings::*;
///
/// let coloring = color_attempt(&Word::new("speed")?, &Word::new("erase")?)?;
///
/// assert_eq!(coloring.to_string(), "y..yy");
/// # Ok::<(), WordleError>(())
/// ```
pub fn color_attempt(answer: &Word, attempt: &Word) -> Result<AttemptColoring, WordleError> {
    check_same_length(answer, attempt)?;
    Ok(color_attempt_unchecked(answer, attempt))
}

/// Computes the colorings for a history that is already known to be valid.
pub(crate) fn colorings_for_history(
    answer: &Word,
    attempts: &[Word],
    hints: impl IntoIterator<Item = usize>,
) -> Colorings {
    let attempt_colorings: Vec<AttemptColoring> = attempts
        .iter()
        .map(|attempt| color_attempt_unchecked(answer, attempt))
        .collect();

    // Attempts are folded in order, so later attempts can only upgrade a letter.
    let keyboard_colorings = zip(attempts, &attempt_colorings).fold(
        KeyboardColorings::default(),
        |mut keyboard, (attempt, coloring)| {
            for (letter, verdict) in zip(attempt.letters(), coloring) {
                keyboard.upgrade(*letter, *verdict);
            }
            keyboard
        },
    );

    let mut deduced_slots = DeducedSlots::new(answer.len());
    for coloring in &attempt_colorings {
        for (index, verdict) in coloring.iter().enumerate() {
            if *verdict == LetterVerdict::Correct {
                deduced_slots.reveal(index, answer[index]);
            }
        }
    }
    // Hints apply whether or not anything has been guessed at that location.
    for hint in hints {
        deduced_slots.reveal(hint, answer[hint]);
    }

    debug!(
        num_attempts = attempts.len(),
        num_keyboard_letters = keyboard_colorings.len(),
        deduced = %deduced_slots,
        "computed colorings"
    );
    Colorings {
        attempt_colorings,
        keyboard_colorings,
        deduced_slots,
    }
}

fn check_same_length(answer: &Word, attempt: &Word) -> Result<(), InvalidInput> {
    if answer.len() != attempt.len() {
        return Err(InvalidInput::WordLength {
            expected: answer.len(),
            actual: attempt.len(),
        });
    }
    Ok(())
}

fn color_attempt_unchecked(answer: &Word, attempt: &Word) -> AttemptColoring {
    let word_length = answer.len();
    let mut verdicts = vec![LetterVerdict::Wrong; word_length];
    let mut used_answer_letters = vec![false; word_length];
    let mut used_attempt_letters = vec![false; word_length];

    for (index, (attempt_letter, answer_letter)) in
        zip(attempt.letters(), answer.letters()).enumerate()
    {
        if attempt_letter == answer_letter {
            verdicts[index] = LetterVerdict::Correct;
            used_answer_letters[index] = true;
            used_attempt_letters[index] = true;
        }
    }

    for (index, attempt_letter) in attempt.letters().iter().enumerate() {
        if used_attempt_letters[index] {
            continue;
        }
        // The earliest unused copy in the answer is matched, so each copy is matched at most once.
        let maybe_answer_index = (0..word_length).find(|&answer_index| {
            !used_answer_letters[answer_index] && answer[answer_index] == *attempt_letter
        });
        if let Some(answer_index) = maybe_answer_index {
            verdicts[index] = LetterVerdict::SemiCorrect;
            used_answer_letters[answer_index] = true;
            used_attempt_letters[index] = true;
        }
    }

    let coloring = AttemptColoring::new(verdicts);
    trace!(%attempt, %coloring, "colored attempt");
    coloring
}
