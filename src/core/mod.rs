//! Core domain types
//!
//! The fundamental domain types with zero external dependencies: words and
//! the feedback codec. All types here are pure and cheap to copy.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackParseError, FeedbackSymbol};
pub use word::{Word, WordError};
