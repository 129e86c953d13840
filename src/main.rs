//! Wordle Alpha-Beta - CLI
//!
//! Adversarial Wordle solver: lets the solver play, assists with a game
//! played elsewhere, or referees a human guesser.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_alphabeta::{
    commands::{
        PromptOracle, is_quit, pick_answer, run_assist, run_benchmark, run_guess, run_play,
        sample_answers,
    },
    core::{CandidateSet, Word},
    output::{print_benchmark_result, print_play_result},
    search::Cutoff,
    solver::{
        AnswerOracle, DEFAULT_GUESS_BUDGET, DEFAULT_WORD_LEN, OpeningBook, Solver, SolverConfig,
    },
    wordlists::loader::{builtin, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_alphabeta",
    about = "Adversarial Wordle solver using alpha-beta search over feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vocabulary file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    vocabulary: Option<PathBuf>,

    /// Letters per word
    #[arg(
        short = 'l',
        long,
        global = true,
        env = "GUESS_LEN",
        default_value_t = DEFAULT_WORD_LEN
    )]
    word_length: usize,

    /// Guesses allowed per game
    #[arg(
        short = 'g',
        long,
        global = true,
        env = "WORDLE_NUM_GUESSES",
        default_value_t = DEFAULT_GUESS_BUDGET
    )]
    guess_budget: usize,

    /// Pruning mode: soft (prune on ties) or hard (prune only past the bound)
    #[arg(short, long, global = true, default_value_t = Cutoff::Soft)]
    cutoff: Cutoff,

    /// Opening guess; repeat for several (replaces the built-in openers)
    #[arg(short, long = "opener", global = true)]
    openers: Vec<String>,

    /// Search every guess, including the first
    #[arg(long, global = true, conflicts_with = "openers")]
    no_openers: bool,

    /// Guesses the search looks ahead; 0 searches to the end of the game
    #[arg(short = 'a', long, global = true, default_value_t = 2)]
    lookahead: usize,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the solver play against a hidden answer (default)
    Play {
        /// The answer to solve (default: random vocabulary word)
        answer: Option<String>,

        /// Show candidate counts and search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest guesses for a game played elsewhere; you enter the feedback
    Assist,

    /// Guess a hidden word yourself
    Guess {
        /// The answer to hide (default: random vocabulary word)
        answer: Option<String>,
    },

    /// Benchmark the solver across many answers
    Benchmark {
        /// Number of random answers to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Test every word in the vocabulary
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .format_timestamp(None)
        .init();

    let universe = load_vocabulary(&cli)?;
    let config = build_config(&cli)?;

    let command = cli.command.unwrap_or(Commands::Play {
        answer: None,
        verbose: false,
    });

    match command {
        Commands::Play { answer, verbose } => run_play_command(universe, config, answer, verbose),
        Commands::Assist => run_assist_command(universe, config),
        Commands::Guess { answer } => run_guess_command(universe, config, answer),
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&universe, &config, count, all)
        }
    }
}

/// Load the vocabulary named by `--vocabulary`, or the built-in list
fn load_vocabulary(cli: &Cli) -> Result<CandidateSet> {
    let universe = match &cli.vocabulary {
        Some(path) => load_from_file(path, cli.word_length)
            .with_context(|| format!("Failed to load vocabulary {}", path.display()))?,
        None => builtin(cli.word_length).with_context(|| {
            format!(
                "The built-in vocabulary has {DEFAULT_WORD_LEN}-letter words; \
                 pass --vocabulary for {}-letter words",
                cli.word_length
            )
        })?,
    };

    ensure!(!universe.is_empty(), "The vocabulary is empty");
    Ok(universe)
}

fn build_config(cli: &Cli) -> Result<SolverConfig> {
    ensure!(cli.guess_budget > 0, "--guess-budget must be at least 1");

    let mut config = SolverConfig::new(cli.word_length)
        .with_guess_budget(cli.guess_budget)
        .with_cutoff(cli.cutoff)
        .with_lookahead((cli.lookahead > 0).then_some(cli.lookahead));

    if cli.no_openers {
        config = config.with_openers(OpeningBook::empty());
    } else if !cli.openers.is_empty() {
        let openers = cli
            .openers
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid --opener")?;
        config = config.with_openers(OpeningBook::new(openers));
    }

    Ok(config)
}

fn run_play_command(
    universe: CandidateSet,
    config: SolverConfig,
    answer: Option<String>,
    verbose: bool,
) -> Result<()> {
    let answer = pick_answer(answer.as_deref(), &universe)?;
    let result = run_play(universe, config, &answer)?;
    print_play_result(&result, verbose);
    Ok(())
}

fn run_assist_command(universe: CandidateSet, config: SolverConfig) -> Result<()> {
    println!("\nI'll suggest guesses that hold up against the worst-case answer.");
    println!("After each guess, enter the feedback the game showed:\n");
    println!("  = correct letter in the correct spot");
    println!("  - letter in the word, but elsewhere");
    println!("  . letter not in the word");
    println!("  or type 'win' when solved, 'quit' to stop\n");

    let word_len = config.word_len;
    let mut solver = Solver::new(universe, config)?;
    let mut oracle = PromptOracle::new(io::stdin().lock(), io::stdout(), word_len);

    match run_assist(&mut solver, &mut oracle) {
        Err(err) if is_quit(&err) => Ok(()),
        result => result.map(|_| ()).context("Assist session failed"),
    }
}

fn run_guess_command(
    universe: CandidateSet,
    config: SolverConfig,
    answer: Option<String>,
) -> Result<()> {
    let answer = pick_answer(answer.as_deref(), &universe)?;
    let mut oracle = AnswerOracle::new(answer, &universe)?;
    let mut solver = Solver::new(universe, config)?;

    println!(
        "\nGuess the {}-letter word. Type 'hint' for a suggestion.\n",
        solver.config().word_len
    );

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    match run_guess(&mut solver, &mut oracle, &mut input, &mut output) {
        Err(err) if is_quit(&err) => {
            println!("The word was {}", oracle.answer().text().to_uppercase());
            Ok(())
        }
        result => result.map(|_| ()).context("Game failed"),
    }
}

fn run_benchmark_command(
    universe: &CandidateSet,
    config: &SolverConfig,
    count: usize,
    all: bool,
) -> Result<()> {
    let answers = if all {
        universe.as_slice().to_vec()
    } else {
        sample_answers(universe, count)
    };

    println!(
        "🎯 Benchmarking {} answers ({} cutoff, lookahead {})...",
        answers.len(),
        config.cutoff,
        config
            .lookahead
            .map_or_else(|| "full".to_string(), |n| n.to_string())
    );

    let result = run_benchmark(universe, config, &answers, true)?;
    print_benchmark_result(&result, config.guess_budget);
    Ok(())
}
