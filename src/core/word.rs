//! Word representation
//!
//! A `Word` is exactly five ASCII letters, normalized to lowercase.

use std::fmt;

/// A validated five-letter word
///
/// Stored as a fixed byte array, so candidate sets can be cloned cheaply
/// (`Word` is `Copy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; 5],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The input did not have exactly five characters
    InvalidLength(usize),
    /// The input contained a non-letter character at the given position
    InvalidCharacter { position: usize, found: char },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly 5 letters, got {len}")
            }
            Self::InvalidCharacter { position, found } => {
                write!(f, "invalid character {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new `Word` from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` identifying the bad length, or the first
    /// non-letter character and its position.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 5 {
            return Err(WordError::InvalidLength(chars.len()));
        }

        let mut letters = [0u8; 5];
        for (position, &found) in chars.iter().enumerate() {
            if !found.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter { position, found });
            }
            letters[position] = found.to_ascii_lowercase() as u8;
        }

        Ok(Self { letters })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - the letters are validated ASCII.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("letters are validated ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; 5] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// First position of a letter in the word, if present
    #[inline]
    #[must_use]
    pub fn first_position(&self, letter: u8) -> Option<usize> {
        self.letters.iter().position(|&l| l == letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
