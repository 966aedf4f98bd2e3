//! Candidate filtering
//!
//! Removes words that could not be the secret given an observed
//! (guess, feedback) pair. Filtering is a pure function over the candidate
//! slice; survivors keep their input order.

use crate::core::{Feedback, FeedbackSymbol, Word};

/// True iff `candidate` could still be the secret given the observation
///
/// Per position of the guess:
/// - `Correct`: the candidate must have the same letter at that position.
/// - `Present`: the candidate must contain the letter, but not at that
///   position.
/// - `Absent`: the candidate must not contain the letter - unless the
///   candidate's first occurrence of it sits at a position whose feedback is
///   `Correct`. The exception resolves guesses that repeat a letter, where
///   one occurrence is marked correct and another absent.
///
/// Evaluation short-circuits at the first failing position.
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: Feedback) -> bool {
    for position in 0..5 {
        let letter = guess.letter_at(position);
        let ok = match feedback.symbol(position) {
            FeedbackSymbol::Absent => match candidate.first_position(letter) {
                Some(first) => feedback.symbol(first) == FeedbackSymbol::Correct,
                None => true,
            },
            FeedbackSymbol::Present => {
                candidate.contains(letter) && candidate.letter_at(position) != letter
            }
            FeedbackSymbol::Correct => candidate.letter_at(position) == letter,
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Keep only the candidates consistent with the observation
///
/// Returns a new collection; the input is never mutated during traversal.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Feedback, Word};
/// use wordle_advisor::solver::filter_candidates;
///
/// let candidates = vec![
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
///     Word::new("trace").unwrap(),
/// ];
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("trace").unwrap();
/// let remaining = filter_candidates(&candidates, &guess, Feedback::encode(&guess, &secret));
/// assert_eq!(remaining, vec![secret]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: Feedback) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| is_consistent(candidate, guess, feedback))
        .copied()
        .collect()
}
