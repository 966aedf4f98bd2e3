//! Wordle Advisor - CLI
//!
//! Interactive assistant and whole-corpus self-play over external word list
//! files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use wordle_advisor::{
    commands::{collect_stats, run_assist, run_self_play},
    output::print_self_play_stats,
    solver::GuessPool,
    wordlists::load_or_empty,
};

#[derive(Parser)]
#[command(
    name = "wordle-advisor",
    about = "Narrows the remaining Wordle candidates after each guess and recommends the next one",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the answers list (all possible secret words, one per line)
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Path to the full guessable list (superset of the answers)
    #[arg(long, global = true, default_value = "data/guesses.txt")]
    guesses: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Assist {
        /// Allow obscure words from the full guess list as recommendations
        #[arg(short, long)]
        expanded: bool,
    },

    /// Play every answer word against synthesized feedback and report try counts
    SelfPlay {
        /// Limit the number of secrets played
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let answers = load_or_empty(&cli.answers);

    // Default to the interactive assistant if no command given
    match cli.command.unwrap_or(Commands::Assist { expanded: false }) {
        Commands::Assist { expanded } => {
            let pool = if expanded {
                GuessPool::Expanded(load_or_empty(&cli.guesses))
            } else {
                GuessPool::Restricted
            };
            run_assist(&answers, pool)
        }
        Commands::SelfPlay { limit } => {
            let start = Instant::now();
            let outcomes = run_self_play(&answers, limit)?;

            for outcome in &outcomes {
                println!("{} {}", outcome.final_guess, outcome.tries);
            }

            let stats = collect_stats(&outcomes, start.elapsed());
            print_self_play_stats(&stats);
            Ok(())
        }
    }
}
