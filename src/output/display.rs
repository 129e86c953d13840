//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, PlayResult};
use crate::core::Word;
use crate::solver::{GameOutcome, GuessSource};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_play_result(result: &PlayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_turns(&result.outcome, verbose);
    print_verdict(&result.outcome);
}

/// Print each turn of a game as a row of tiles
pub fn print_turns(outcome: &GameOutcome, verbose: bool) {
    for (i, turn) in outcome.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&turn.guess, turn.feedback),
            turn.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            match turn.source {
                GuessSource::Opener => println!("  Source:     opening book"),
                GuessSource::Manual => println!("  Source:     manual"),
                GuessSource::Search {
                    score,
                    nodes,
                    cutoffs,
                } => {
                    println!("  Source:     search (worst-case score {score})");
                    println!("  Searched:   {nodes} nodes, {cutoffs} cutoffs");
                }
            }
        }
    }
}

fn print_verdict(outcome: &GameOutcome) {
    println!();
    if outcome.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.guess_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", outcome.guess_count())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, guess_budget: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=guess_budget {
            let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed.is_empty() {
        let failed: Vec<&str> = result.failed.iter().map(Word::text).collect();
        println!("\n{} {}", "Failed:".red().bold(), failed.join(", "));
    }
}
