//! Solver session state machine
//!
//! A [`Session`] owns one game's candidate set and replays the same
//! filter-count-score pipeline for every observed turn. Both entry modes
//! drive it the same way: the interactive assistant feeds it guesses and
//! feedback typed by the player, self-play feeds it its own recommendations
//! and synthesized feedback.

use super::filter::filter_candidates;
use super::frequency::FrequencyTable;
use super::scorer::best_guess;
use crate::core::{Feedback, Word};
use std::fmt;

/// Candidates are only listed for the player when this few remain.
const SHORTLIST_MAX: usize = 20;

/// Which pool of words may be recommended as the next guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessPool {
    /// Recommend only words still in the candidate set
    Restricted,
    /// Recommend from the full expanded list, including words that can no
    /// longer be the answer (they can still split the candidates well)
    Expanded(Vec<Word>),
}

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to accept the next guess
    AwaitingGuess,
    /// A guess is pending; ready to accept its feedback
    AwaitingFeedback,
    /// All-correct feedback was observed
    Solved,
    /// No candidate is consistent with the observations; fatal to the session
    Exhausted,
    /// The player quit
    Terminated,
}

/// A recommendation for the next guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    /// The highest-scoring word in the guess pool
    pub word: Word,
    /// Its score against the current frequency table
    pub score: u32,
    /// How many candidates remain
    pub remaining: usize,
    /// The full candidate list, populated only when 2 to 20 words remain
    pub shortlist: Vec<Word>,
}

/// The outcome of one observed (guess, feedback) turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The feedback was all-correct
    Solved { tries: usize },
    /// No candidate survived the observation
    Exhausted,
    /// Exactly one candidate remains; it must be the answer
    Forced(Word),
    /// Multiple candidates remain; here is the best next guess
    Advice(Advice),
}

/// Error for driving the session from the wrong state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `submit_guess` called outside `AwaitingGuess`
    NotAwaitingGuess(SessionState),
    /// `submit_feedback` called outside `AwaitingFeedback`
    NotAwaitingFeedback(SessionState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAwaitingGuess(state) => {
                write!(f, "cannot accept a guess in state {state:?}")
            }
            Self::NotAwaitingFeedback(state) => {
                write!(f, "cannot accept feedback in state {state:?}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// One game's worth of solver state
pub struct Session {
    candidates: Vec<Word>,
    pool: GuessPool,
    state: SessionState,
    pending: Option<Word>,
    tries: usize,
}

impl Session {
    /// Start a session over a fresh copy of the restricted corpus
    ///
    /// An empty corpus starts the session in `Exhausted` directly; there is
    /// nothing to recommend and no feedback can change that.
    #[must_use]
    pub fn new(restricted: &[Word], pool: GuessPool) -> Self {
        let state = if restricted.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::AwaitingGuess
        };
        Self {
            candidates: restricted.to_vec(),
            pool,
            state,
            pending: None,
            tries: 0,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    /// The words still consistent with every observation
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Accept the next guess
    ///
    /// # Errors
    /// Fails unless the session is in `AwaitingGuess`.
    pub fn submit_guess(&mut self, guess: Word) -> Result<(), SessionError> {
        if self.state != SessionState::AwaitingGuess {
            return Err(SessionError::NotAwaitingGuess(self.state));
        }
        self.pending = Some(guess);
        self.tries += 1;
        self.state = SessionState::AwaitingFeedback;
        Ok(())
    }

    /// End the session from the guess prompt (the `exit` sentinel)
    pub fn quit(&mut self) {
        self.state = SessionState::Terminated;
    }

    /// Accept the feedback for the pending guess and advance one turn
    ///
    /// All-correct feedback solves the session. Otherwise the candidate set
    /// is filtered; an empty result exhausts the session, a single survivor
    /// is reported as the forced answer, and anything else comes back as
    /// fresh [`Advice`]. After a non-terminal turn the session is ready for
    /// the next guess.
    ///
    /// # Errors
    /// Fails unless the session is in `AwaitingFeedback`.
    pub fn submit_feedback(&mut self, feedback: Feedback) -> Result<Turn, SessionError> {
        if self.state != SessionState::AwaitingFeedback {
            return Err(SessionError::NotAwaitingFeedback(self.state));
        }
        let guess = self
            .pending
            .take()
            .ok_or(SessionError::NotAwaitingFeedback(self.state))?;

        if feedback.is_solved() {
            self.state = SessionState::Solved;
            return Ok(Turn::Solved { tries: self.tries });
        }

        self.candidates = filter_candidates(&self.candidates, &guess, feedback);
        if self.candidates.is_empty() {
            self.state = SessionState::Exhausted;
            return Ok(Turn::Exhausted);
        }

        self.state = SessionState::AwaitingGuess;
        if let [only] = self.candidates.as_slice() {
            return Ok(Turn::Forced(*only));
        }

        match self.advise() {
            Some(advice) => Ok(Turn::Advice(advice)),
            None => {
                // Unreachable with a non-empty candidate set, but degrade to
                // exhaustion rather than panic.
                self.state = SessionState::Exhausted;
                Ok(Turn::Exhausted)
            }
        }
    }

    /// Score the guess pool against the current candidates
    ///
    /// Usable before any guess was made; self-play takes its opening guess
    /// from here. Returns `None` when no candidates remain. An expanded pool
    /// that turned out empty (failed load) falls back to the candidate set.
    #[must_use]
    pub fn advise(&self) -> Option<Advice> {
        if self.candidates.is_empty() {
            return None;
        }
        let table = FrequencyTable::build(&self.candidates);
        let pool: &[Word] = match &self.pool {
            GuessPool::Expanded(expanded) if !expanded.is_empty() => expanded,
            _ => &self.candidates,
        };
        let (word, score) = best_guess(pool, &table)?;

        let remaining = self.candidates.len();
        let shortlist = if (2..=SHORTLIST_MAX).contains(&remaining) {
            self.candidates.clone()
        } else {
            Vec::new()
        };
        Some(Advice {
            word: *word,
            score,
            remaining,
            shortlist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn corpus() -> Vec<Word> {
        ["crane", "slate", "trace", "grape"]
            .iter()
            .map(|t| word(t))
            .collect()
    }

    #[test]
    fn empty_corpus_is_exhausted_immediately() {
        let session = Session::new(&[], GuessPool::Restricted);
        assert_eq!(session.state(), SessionState::Exhausted);
        assert!(session.advise().is_none());
    }

    #[test]
    fn all_correct_feedback_solves_in_one_try() {
        let mut session = Session::new(&corpus(), GuessPool::Restricted);
        session.submit_guess(word("crane")).unwrap();
        let turn = session.submit_feedback("22222".parse().unwrap()).unwrap();
        assert_eq!(turn, Turn::Solved { tries: 1 });
        assert_eq!(session.state(), SessionState::Solved);
    }

    #[test]
    fn tries_count_across_turns() {
        let mut session = Session::new(&corpus(), GuessPool::Restricted);
        session.submit_guess(word("slate")).unwrap();
        let feedback = Feedback::encode(&word("slate"), &word("grape"));
        session.submit_feedback(feedback).unwrap();

        session.submit_guess(word("grape")).unwrap();
        let turn = session.submit_feedback("22222".parse().unwrap()).unwrap();
        assert_eq!(turn, Turn::Solved { tries: 2 });
    }

    #[test]
    fn single_survivor_is_forced() {
        let mut session = Session::new(&corpus(), GuessPool::Restricted);
        let guess = word("crane");
        session.submit_guess(guess).unwrap();
        let feedback = Feedback::encode(&guess, &word("trace"));
        let turn = session.submit_feedback(feedback).unwrap();
        assert_eq!(turn, Turn::Forced(word("trace")));
        // Still playable: the caller may guess the forced word next.
        assert_eq!(session.state(), SessionState::AwaitingGuess);
    }

    #[test]
    fn impossible_feedback_exhausts_the_session() {
        let mut session = Session::new(&corpus(), GuessPool::Restricted);
        session.submit_guess(word("zzzzz")).unwrap();
        // Claiming z is present everywhere leaves nothing.
        let turn = session.submit_feedback("11111".parse().unwrap()).unwrap();
        assert_eq!(turn, Turn::Exhausted);
        assert_eq!(session.state(), SessionState::Exhausted);
        // Fatal: no further guesses are accepted.
        assert!(session.submit_guess(word("crane")).is_err());
    }

    #[test]
    fn advice_carries_shortlist_for_small_sets() {
        let mut session = Session::new(&corpus(), GuessPool::Restricted);
        let guess = word("zzzzz");
        session.submit_guess(guess).unwrap();
        // No information: every word survives.
        let turn = session.submit_feedback("00000".parse().unwrap()).unwrap();
        match turn {
            Turn::Advice(advice) => {
                assert_eq!(advice.remaining, 4);
                assert_eq!(advice.shortlist, corpus());
                assert!(corpus().contains(&advice.word));
            }
            other => panic!("expected advice, got {other:?}"),
        }
    }

    #[test]
    fn no_shortlist_above_twenty_candidates() {
        // 21 words differing only in the last letter survive a no-op turn.
        let many: Vec<Word> = (b'a'..=b'u')
            .map(|last| {
                Word::new(&format!("grim{}", last as char)).unwrap()
            })
            .collect();
        assert_eq!(many.len(), 21);

        let mut session = Session::new(&many, GuessPool::Restricted);
        session.submit_guess(word("zzzzz")).unwrap();
        let turn = session.submit_feedback("00000".parse().unwrap()).unwrap();
        match turn {
            Turn::Advice(advice) => {
                assert_eq!(advice.remaining, 21);
                assert!(advice.shortlist.is_empty());
            }
            other => panic!("expected advice, got {other:?}"),
        }
    }

    #[test]
    fn expanded_pool_may_recommend_a_non_candidate() {
        // Both candidates repeat a letter (h in humph, z in fuzzy) and score 5;
        // humpy covers the best column of every position with distinct letters
        // and scores 6, despite being impossible as the answer.
        let restricted = vec![word("humph"), word("fuzzy")];
        let expanded = vec![word("humph"), word("fuzzy"), word("humpy")];
        let mut session = Session::new(&restricted, GuessPool::Expanded(expanded));
        session.submit_guess(word("taser")).unwrap();
        let turn = session.submit_feedback("00000".parse().unwrap()).unwrap();
        match turn {
            Turn::Advice(advice) => {
                assert_eq!(advice.word, word("humpy"));
                assert_eq!(advice.score, 6);
                assert_eq!(advice.remaining, 2);
                assert!(!session.candidates().contains(&advice.word));
            }
            other => panic!("expected advice, got {other:?}"),
        }
    }

    #[test]
    fn empty_expanded_pool_falls_back_to_candidates() {
        let mut session = Session::new(&corpus(), GuessPool::Expanded(Vec::new()));
        let advice = session.advise().unwrap();
        assert!(corpus().contains(&advice.word));
        session.quit();
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[test]
    fn wrong_state_calls_fail_fast() {
        let mut session = Session::new(&corpus(), GuessPool::Restricted);
        assert_eq!(
            session.submit_feedback("00000".parse().unwrap()),
            Err(SessionError::NotAwaitingFeedback(SessionState::AwaitingGuess))
        );
        session.submit_guess(word("crane")).unwrap();
        assert_eq!(
            session.submit_guess(word("slate")),
            Err(SessionError::NotAwaitingGuess(SessionState::AwaitingFeedback))
        );
    }

    #[test]
    fn quit_terminates() {
        let mut session = Session::new(&corpus(), GuessPool::Restricted);
        session.quit();
        assert_eq!(session.state(), SessionState::Terminated);
        assert!(session.submit_guess(word("crane")).is_err());
    }
}
