//! Wordle Advisor
//!
//! A word-guessing assistant for five-letter, position/containment-feedback
//! games. Given a corpus of candidate words and a sequence of
//! (guess, feedback) observations, it narrows the set of words still
//! consistent with all observations and recommends the next guess that
//! maximizes expected information gain under a positional letter-frequency
//! heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Feedback, Word};
//! use wordle_advisor::solver::filter_candidates;
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("trace").unwrap();
//!
//! let feedback = Feedback::encode(&guess, &secret);
//! assert_eq!(feedback.to_string(), "12202");
//!
//! let candidates = vec![guess, secret];
//! assert_eq!(filter_candidates(&candidates, &guess, feedback), vec![secret]);
//! ```

// Core domain types
pub mod core;

// The filtering and scoring engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
