//! Error types shared by the solver and its outer layers

use crate::core::WordError;
use thiserror::Error;

/// Errors raised while configuring or playing a game
///
/// Configuration errors (`AimNotInVocabulary`, `InvalidLength` on the
/// universe) and `EmptyCandidateSet` are fatal for a run. Interactive input
/// errors are reported so the prompt can ask again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("'{text}' has {actual} letters, expected {expected}")]
    InvalidLength {
        text: String,
        expected: usize,
        actual: usize,
    },
    #[error("'{0}' is not in the vocabulary")]
    UnknownVocabularyWord(String),
    #[error("invalid feedback symbol '{symbol}' in '{text}' (use '.', '-' or '=')")]
    InvalidFeedbackSymbol { text: String, symbol: char },
    #[error("answer '{0}' is not in the vocabulary")]
    AimNotInVocabulary(String),
    #[error("no candidate words are consistent with the feedback")]
    EmptyCandidateSet,
    #[error("history has {guesses} guesses but {feedbacks} feedbacks")]
    HistoryMismatch { guesses: usize, feedbacks: usize },
    #[error("no guess is waiting for feedback")]
    NoPendingGuess,
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("input error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
