//! Feedback representation and codec
//!
//! Feedback is the per-position result reported after a guess: one of
//! `Absent`, `Present`, or `Correct` for each of the five positions. The
//! external encoding is a five-digit string of `0` (absent), `1` (present),
//! and `2` (correct), left to right matching guess positions.

use super::Word;
use std::fmt;
use std::str::FromStr;

/// The result for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// The letter does not appear in the secret (digit `0`)
    Absent,
    /// The letter appears in the secret, but not at this position (digit `1`)
    Present,
    /// The letter is at this exact position in the secret (digit `2`)
    Correct,
}

impl FeedbackSymbol {
    /// The digit used in the external encoding
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Correct => '2',
        }
    }

    const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Self::Absent),
            '1' => Some(Self::Present),
            '2' => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Feedback for a full five-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    symbols: [FeedbackSymbol; 5],
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackParseError {
    /// The input did not have exactly five characters
    BadLength(usize),
    /// A character outside `{0, 1, 2}` at the given position
    BadSymbol { position: usize, found: char },
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "feedback must be exactly 5 digits, got {len}")
            }
            Self::BadSymbol { position, found } => {
                write!(
                    f,
                    "invalid feedback symbol {found:?} at position {position} (expected 0, 1 or 2)"
                )
            }
        }
    }
}

impl std::error::Error for FeedbackParseError {}

impl Feedback {
    /// The all-correct feedback (the game is solved)
    pub const SOLVED: Self = Self {
        symbols: [FeedbackSymbol::Correct; 5],
    };

    /// Create feedback from explicit symbols
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; 5]) -> Self {
        Self { symbols }
    }

    /// Synthesize the feedback for `guess` when `secret` is the answer
    ///
    /// Per position: `Correct` when the letters match exactly, otherwise
    /// `Present` when the guessed letter occurs anywhere in the secret,
    /// otherwise `Absent`. A letter that repeats in the guess is judged by
    /// membership alone at each of its positions; there is no two-pass
    /// duplicate accounting.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("trace").unwrap();
    /// let feedback = Feedback::encode(&guess, &secret);
    /// assert_eq!(feedback.to_string(), "12202");
    /// ```
    #[must_use]
    pub fn encode(guess: &Word, secret: &Word) -> Self {
        let mut symbols = [FeedbackSymbol::Absent; 5];
        for (position, symbol) in symbols.iter_mut().enumerate() {
            let letter = guess.letter_at(position);
            if secret.letter_at(position) == letter {
                *symbol = FeedbackSymbol::Correct;
            } else if secret.contains(letter) {
                *symbol = FeedbackSymbol::Present;
            }
        }
        Self { symbols }
    }

    /// The symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol(self, position: usize) -> FeedbackSymbol {
        self.symbols[position]
    }

    /// All five symbols in guess order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; 5] {
        &self.symbols
    }

    /// True iff every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.symbols.iter().all(|&s| s == FeedbackSymbol::Correct)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse the external five-digit encoding, e.g. `"01021"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 {
            return Err(FeedbackParseError::BadLength(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Absent; 5];
        for (position, &found) in chars.iter().enumerate() {
            symbols[position] = FeedbackSymbol::from_digit(found)
                .ok_or(FeedbackParseError::BadSymbol { position, found })?;
        }

        Ok(Self { symbols })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.digit())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn encode_exact_match_is_all_correct() {
        let crane = word("crane");
        let feedback = Feedback::encode(&crane, &crane);
        assert_eq!(feedback, Feedback::SOLVED);
        assert!(feedback.is_solved());
    }

    #[test]
    fn encode_no_shared_letters_is_all_absent() {
        let feedback = Feedback::encode(&word("crane"), &word("shout"));
        assert_eq!(feedback.to_string(), "00000");
        assert!(!feedback.is_solved());
    }

    #[test]
    fn encode_membership_rule() {
        // c is in trace elsewhere, r/a/e match exactly, n is missing
        let feedback = Feedback::encode(&word("crane"), &word("trace"));
        assert_eq!(feedback.to_string(), "12202");
    }

    #[test]
    fn encode_repeated_guess_letter_judged_by_membership_alone() {
        // Both e positions in "geese" report present against "stage", even
        // though the secret has a single e.
        let feedback = Feedback::encode(&word("geese"), &word("stage"));
        assert_eq!(feedback.to_string(), "11112");
    }

    #[test]
    fn parse_valid() {
        let feedback: Feedback = "01021".parse().unwrap();
        assert_eq!(feedback.symbol(0), FeedbackSymbol::Absent);
        assert_eq!(feedback.symbol(1), FeedbackSymbol::Present);
        assert_eq!(feedback.symbol(2), FeedbackSymbol::Absent);
        assert_eq!(feedback.symbol(3), FeedbackSymbol::Correct);
        assert_eq!(feedback.symbol(4), FeedbackSymbol::Present);
    }

    #[test]
    fn parse_bad_length() {
        assert_eq!(
            "2222".parse::<Feedback>(),
            Err(FeedbackParseError::BadLength(4))
        );
        assert_eq!(
            "222222".parse::<Feedback>(),
            Err(FeedbackParseError::BadLength(6))
        );
    }

    #[test]
    fn parse_bad_symbol_reports_position() {
        // Five characters, but spaces are not feedback digits
        assert_eq!(
            "2 2 2".parse::<Feedback>(),
            Err(FeedbackParseError::BadSymbol {
                position: 1,
                found: ' '
            })
        );
        assert_eq!(
            "01231".parse::<Feedback>(),
            Err(FeedbackParseError::BadSymbol {
                position: 3,
                found: '3'
            })
        );
    }

    #[test]
    fn display_round_trips_parse() {
        let feedback: Feedback = "21012".parse().unwrap();
        assert_eq!(feedback.to_string(), "21012");
    }

    #[test]
    fn solved_constant_formats_as_all_twos() {
        assert_eq!(Feedback::SOLVED.to_string(), "22222");
    }
}
