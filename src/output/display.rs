//! Display functions for self-play results

use crate::commands::SelfPlayStats;
use colored::Colorize;

/// Print aggregate self-play statistics
pub fn print_self_play_stats(stats: &SelfPlayStats) {
    println!("\n{}", "═".repeat(60));
    println!(" Self-play Results ");
    println!("{}", "═".repeat(60));

    println!("\n{}", "Overall".bright_cyan().bold());
    println!("  Secrets played:   {}", stats.total);
    println!(
        "  Solved:           {} {}",
        stats.solved,
        if stats.total > 0 {
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total as f64 * 100.0
            )
            .green()
            .to_string()
        } else {
            String::new()
        }
    );
    if stats.failed > 0 {
        println!(
            "  {} {}",
            "Exhausted:".red().bold(),
            format!("{} (candidate set emptied - should never happen)", stats.failed).red()
        );
    }
    println!(
        "  Average tries:    {}",
        format!("{:.3}", stats.average_tries).bright_yellow().bold()
    );
    println!("  Worst case:       {} tries", stats.max_tries);
    println!(
        "  Total time:       {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n{}", "Try Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for tries in 1..=stats.max_tries {
        let count = stats.distribution.get(&tries).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (count * 40 / max_count).max(usize::from(count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {tries} tries: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest Words".yellow().bold());
        for (word, tries) in stats.worst_words.iter().take(5) {
            println!(
                "  {} ({} tries)",
                word.as_str().to_uppercase().yellow(),
                tries
            );
        }
    }
}
