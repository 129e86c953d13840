//! Wordle Alpha-Beta
//!
//! An adversarial Wordle solver. The guesser plays against nature, which may
//! pick any answer still consistent with the feedback so far; alpha-beta
//! search chooses the guess with the best worst case.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_alphabeta::core::{CandidateSet, Word, evaluate};
//! use wordle_alphabeta::solver::{AnswerOracle, Solver, SolverConfig};
//!
//! // Feedback for a guess against an answer
//! let answer = Word::new("troll").unwrap();
//! let guess = Word::new("twist").unwrap();
//! assert_eq!(evaluate(&answer, &guess).to_string(), "=....");
//!
//! // Solve a hidden word
//! let universe = CandidateSet::parse(["abbot", "crate", "motto", "today"], 5).unwrap();
//! let mut oracle = AnswerOracle::new(Word::new("today").unwrap(), &universe).unwrap();
//! let mut solver = Solver::new(universe, SolverConfig::default()).unwrap();
//! let outcome = solver.run(&mut oracle).unwrap();
//! assert!(outcome.solved);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Generic game-tree search
pub mod search;

// Solver built on the search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
