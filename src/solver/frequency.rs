//! Positional letter frequencies
//!
//! Counts, for the current candidate set, how many words carry each letter at
//! each position. The table is rebuilt from scratch every turn; it is never
//! carried across turns.

use crate::core::Word;

/// A 5x26 table of per-position letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [[u32; 26]; 5],
}

impl FrequencyTable {
    /// Build the table for a candidate set
    ///
    /// `table[pos][letter]` ends up as the number of words with `letter` at
    /// `pos`. The candidates are not mutated.
    #[must_use]
    pub fn build(candidates: &[Word]) -> Self {
        let mut counts = [[0u32; 26]; 5];
        for word in candidates {
            for (position, &letter) in word.letters().iter().enumerate() {
                counts[position][usize::from(letter - b'a')] += 1;
            }
        }
        Self { counts }
    }

    /// Number of candidate words with `letter` at `position`
    ///
    /// # Panics
    /// Panics if position >= 5 or letter is not a lowercase ASCII letter.
    #[inline]
    #[must_use]
    pub const fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][(letter - b'a') as usize]
    }
}
