//! Guess scoring
//!
//! Scores a word against the positional frequency table of the current
//! candidate set. A higher score means the word's letters coincide with more
//! candidates, so guessing it is expected to split the set harder.
//!
//! Repeated letters would otherwise inflate the score even though the game
//! only ever confirms one instance of a letter, so each distinct letter is
//! allowed to contribute exactly once, from its highest-count position.

use super::frequency::FrequencyTable;
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Score a single word against the frequency table
///
/// Each position contributes the table count for its letter, except that a
/// letter appearing more than once only keeps the contribution of its
/// highest-count occurrence; the other occurrences contribute zero.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::{FrequencyTable, score};
///
/// let candidates = vec![Word::new("crane").unwrap(), Word::new("crate").unwrap()];
/// let table = FrequencyTable::build(&candidates);
/// assert_eq!(score(&Word::new("crane").unwrap(), &table), 2 + 2 + 2 + 1 + 2);
/// ```
#[must_use]
pub fn score(word: &Word, table: &FrequencyTable) -> u32 {
    // Best contribution claimed so far, per letter.
    let mut claims: FxHashMap<u8, u32> = FxHashMap::default();
    let mut total = 0u32;

    for (position, &letter) in word.letters().iter().enumerate() {
        let contribution = table.count(position, letter);
        match claims.get_mut(&letter) {
            Some(claimed) => {
                if *claimed < contribution {
                    // Revoke the earlier, weaker claim.
                    total = total - *claimed + contribution;
                    *claimed = contribution;
                }
            }
            None => {
                claims.insert(letter, contribution);
                total += contribution;
            }
        }
    }

    total
}

/// Pick the highest-scoring word from a pool
///
/// Ties are broken by input order: the first word to reach the maximum stays
/// the recommendation. Returns `None` only for an empty pool.
#[must_use]
pub fn best_guess<'a>(pool: &'a [Word], table: &FrequencyTable) -> Option<(&'a Word, u32)> {
    let mut best: Option<(&Word, u32)> = None;
    for word in pool {
        let word_score = score(word, table);
        if best.is_none_or(|(_, high)| word_score > high) {
            best = Some((word, word_score));
        }
    }
    best
}
