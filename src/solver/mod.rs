//! The constraint-reduction and guess-scoring engine
//!
//! Filtering, frequency analysis, scoring, and the session state machine
//! that ties them together turn by turn.

mod engine;
mod filter;
mod frequency;
mod scorer;

pub use engine::{Advice, GuessPool, Session, SessionError, SessionState, Turn};
pub use filter::{filter_candidates, is_consistent};
pub use frequency::FrequencyTable;
pub use scorer::{best_guess, score};
