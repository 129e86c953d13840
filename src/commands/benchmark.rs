//! Benchmark command
//!
//! Plays the solver against many answers and collects statistics.

use crate::core::{CandidateSet, Word};
use crate::error::SolverError;
use crate::solver::{AnswerOracle, Solver, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers the solver did not find within the budget
    pub failed: Vec<Word>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Up to `count` distinct answers drawn at random, in lexicographic order
#[must_use]
pub fn sample_answers(universe: &CandidateSet, count: usize) -> Vec<Word> {
    let mut answers: Vec<Word> = universe
        .as_slice()
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect();
    answers.sort_unstable();
    answers
}

/// Play one game per answer, each with a fresh solver
///
/// # Errors
/// Returns the first error a game raises, such as `AimNotInVocabulary` for
/// an answer outside `universe`.
pub fn run_benchmark(
    universe: &CandidateSet,
    config: &SolverConfig,
    answers: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult, SolverError> {
    let pb = if show_progress {
        ProgressBar::new(answers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut solved = 0;
    let mut failed = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (idx, answer) in answers.iter().enumerate() {
        let mut oracle = AnswerOracle::new(answer.clone(), universe)?;
        let mut solver = Solver::new(universe.clone(), config.clone())?;
        let outcome = solver.run(&mut oracle)?;

        let guesses = outcome.guess_count();
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);

        if outcome.solved {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            warn!("failed to solve '{answer}' in {guesses} guesses");
            failed.push(answer.clone());
        }

        if idx % 10 == 0 {
            let avg = total_guesses as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = answers.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
