//! Interactive assistant mode
//!
//! The player relays each guess they made in the real game and the feedback
//! it produced; the assistant narrows the remaining words and recommends the
//! best next guess. Prompting runs over stdin, one line per answer.

use crate::core::{Feedback, Word};
use crate::solver::{Advice, GuessPool, Session, SessionState, Turn};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Ends the session from the guess prompt. Four letters, so it can never
/// collide with a valid guess.
const EXIT_SENTINEL: &str = "exit";

/// Run the interactive assistant
///
/// # Errors
///
/// Returns an error only for I/O failures on stdin/stdout; malformed guesses
/// and feedback are reported and re-prompted instead.
pub fn run_assist(restricted: &[Word], pool: GuessPool) -> Result<()> {
    println!("\n{}", "Wordle Advisor - Interactive Mode".bold());
    println!("Relay each guess you make and the feedback the game shows.");
    println!("Feedback is five digits: 0 = gray, 1 = yellow, 2 = green (eg 01021).");
    println!("Type '{EXIT_SENTINEL}' at the guess prompt to quit.\n");

    let mut session = Session::new(restricted, pool);

    if session.state() == SessionState::Exhausted {
        report_exhausted();
        return Ok(());
    }

    if let Some(advice) = session.advise() {
        println!(
            "Opening suggestion: {} ({} points across {} possible words)\n",
            advice.word.as_str().to_uppercase().bold(),
            advice.score,
            advice.remaining
        );
    }

    loop {
        match session.state() {
            SessionState::AwaitingGuess => {
                let input = prompt("Enter your guess")?;
                if input == EXIT_SENTINEL {
                    session.quit();
                    continue;
                }
                match Word::new(&input) {
                    Ok(guess) => {
                        // Fresh sessions only ever refuse a guess after a
                        // terminal state, which this arm never reaches.
                        session.submit_guess(guess)?;
                    }
                    Err(err) => println!("{} {err}", "invalid guess:".red()),
                }
            }
            SessionState::AwaitingFeedback => {
                let input = prompt("Enter your result")?;
                match input.parse::<Feedback>() {
                    Ok(feedback) => report_turn(&session.submit_feedback(feedback)?),
                    Err(err) => println!("{} {err}", "invalid feedback:".red()),
                }
            }
            SessionState::Solved | SessionState::Exhausted | SessionState::Terminated => {
                break;
            }
        }
    }

    Ok(())
}

fn report_turn(turn: &Turn) {
    match turn {
        Turn::Solved { tries } => {
            let noun = if *tries == 1 { "try" } else { "tries" };
            println!(
                "\n{}",
                format!("The word was correctly guessed in {tries} {noun}")
                    .green()
                    .bold()
            );
        }
        Turn::Exhausted => report_exhausted(),
        Turn::Forced(word) => {
            println!(
                "\nthe only possible remaining word is {}\n",
                word.as_str().to_uppercase().bold()
            );
        }
        Turn::Advice(advice) => report_advice(advice),
    }
}

fn report_advice(advice: &Advice) {
    if !advice.shortlist.is_empty() {
        println!();
        for candidate in &advice.shortlist {
            println!("  {candidate}");
        }
    }
    println!("\n{} possible words left", advice.remaining);
    println!(
        "best next guess is {}, scoring {} points\n",
        advice.word.as_str().to_uppercase().bold(),
        advice.score
    );
}

fn report_exhausted() {
    println!(
        "\n{}",
        "fatal: no consistent word remains. Unable to determine the correct word"
            .red()
            .bold()
    );
}

/// Read one trimmed, lowercased line of input
fn prompt(text: &str) -> Result<String> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        // stdin closed; treat as a quit request
        return Ok(EXIT_SENTINEL.to_string());
    }

    Ok(input.trim().to_lowercase())
}
