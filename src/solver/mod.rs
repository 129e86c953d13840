//! Wordle solving as an adversarial game
//!
//! The guesser and nature alternate on a [`Board`]; the [`Solver`] drives a
//! real game, asking an [`Oracle`] for feedback.

mod board;
mod cache;
mod config;
mod engine;
mod openers;
mod oracle;

pub use board::{Board, MAXIMUM_SCORE, MINIMUM_SCORE};
pub use cache::{CacheStats, EvalCache};
pub use config::{DEFAULT_GUESS_BUDGET, DEFAULT_WORD_LEN, SolverConfig};
pub use engine::{GameOutcome, GuessSource, Solver, Turn};
pub use openers::OpeningBook;
pub use oracle::{AnswerOracle, Oracle, ScriptedOracle};
