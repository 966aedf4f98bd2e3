//! Self-play over the whole corpus
//!
//! Treats every word of the restricted corpus as the secret in turn, lets
//! the solver play against the synthesized feedback, and records how many
//! guesses each word took. Sessions are fully independent - each one owns a
//! fresh clone of the candidate set - so they run in parallel.

use crate::core::{Feedback, Word};
use crate::solver::{GuessPool, Session, SessionError, Turn};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

/// Result of solving a single secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayOutcome {
    pub secret: Word,
    /// The last guess submitted; equals the secret on success
    pub final_guess: Word,
    pub tries: usize,
    /// False only when the candidate set emptied, which cannot happen for a
    /// secret drawn from the corpus itself
    pub solved: bool,
}

/// Aggregate statistics over all self-play outcomes
#[derive(Debug)]
pub struct SelfPlayStats {
    pub total: usize,
    pub solved: usize,
    pub failed: usize,
    /// tries -> number of secrets solved in that many tries
    pub distribution: HashMap<usize, usize>,
    pub average_tries: f64,
    pub max_tries: usize,
    /// The secrets that needed the most tries, hardest first
    pub worst_words: Vec<(Word, usize)>,
    pub total_time: Duration,
}

/// Play one session against a known secret
///
/// The opening guess is the advisor's recommendation over the unfiltered
/// candidate set; every later guess comes out of the session's own advice.
///
/// # Errors
///
/// Propagates `SessionError`, which the drive loop below cannot actually
/// trigger.
pub fn solve_secret(restricted: &[Word], secret: &Word) -> Result<SelfPlayOutcome, SessionError> {
    let mut session = Session::new(restricted, GuessPool::Restricted);
    let Some(opening) = session.advise() else {
        return Ok(SelfPlayOutcome {
            secret: *secret,
            final_guess: *secret,
            tries: 0,
            solved: false,
        });
    };

    let mut guess = opening.word;
    loop {
        session.submit_guess(guess)?;
        let feedback = Feedback::encode(&guess, secret);
        match session.submit_feedback(feedback)? {
            Turn::Solved { tries } => {
                return Ok(SelfPlayOutcome {
                    secret: *secret,
                    final_guess: guess,
                    tries,
                    solved: true,
                });
            }
            Turn::Exhausted => {
                return Ok(SelfPlayOutcome {
                    secret: *secret,
                    final_guess: guess,
                    tries: session.tries(),
                    solved: false,
                });
            }
            Turn::Forced(next) => guess = next,
            Turn::Advice(advice) => guess = advice.word,
        }
    }
}

/// Run self-play for every corpus word (or a limited prefix)
///
/// Outcomes come back in corpus order regardless of the parallel schedule.
///
/// # Errors
///
/// Propagates `SessionError` from any session; see [`solve_secret`].
pub fn run_self_play(
    restricted: &[Word],
    limit: Option<usize>,
) -> Result<Vec<SelfPlayOutcome>, SessionError> {
    let secrets = &restricted[..limit.unwrap_or(restricted.len()).min(restricted.len())];

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let outcomes = secrets
        .par_iter()
        .map(|secret| {
            let outcome = solve_secret(restricted, secret);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>();
    pb.finish_and_clear();

    outcomes
}

/// Summarize self-play outcomes
#[must_use]
pub fn collect_stats(outcomes: &[SelfPlayOutcome], total_time: Duration) -> SelfPlayStats {
    let solved_outcomes: Vec<&SelfPlayOutcome> =
        outcomes.iter().filter(|o| o.solved).collect();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in &solved_outcomes {
        *distribution.entry(outcome.tries).or_insert(0) += 1;
    }

    let total_tries: usize = solved_outcomes.iter().map(|o| o.tries).sum();
    let average_tries = if solved_outcomes.is_empty() {
        0.0
    } else {
        total_tries as f64 / solved_outcomes.len() as f64
    };
    let max_tries = solved_outcomes.iter().map(|o| o.tries).max().unwrap_or(0);

    let mut worst_words: Vec<(Word, usize)> = solved_outcomes
        .iter()
        .filter(|o| o.tries >= 5)
        .map(|o| (o.secret, o.tries))
        .collect();
    worst_words.sort_by_key(|(_, tries)| std::cmp::Reverse(*tries));
    worst_words.truncate(10);

    SelfPlayStats {
        total: outcomes.len(),
        solved: solved_outcomes.len(),
        failed: outcomes.len() - solved_outcomes.len(),
        distribution,
        average_tries,
        max_tries,
        worst_words,
        total_time,
    }
}
