//! Solver configuration

use super::openers::OpeningBook;
use crate::search::Cutoff;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_GUESS_BUDGET: usize = 6;

/// Word length unless configured otherwise
pub const DEFAULT_WORD_LEN: usize = 5;

/// Parameters fixed for the whole run of a [`Solver`](super::Solver)
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub word_len: usize,
    pub guess_budget: usize,
    pub cutoff: Cutoff,
    /// Guesses the search looks ahead; `None` searches to the budget
    pub lookahead: Option<usize>,
    pub openers: OpeningBook,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LEN)
    }
}

impl SolverConfig {
    /// Defaults for words of `word_len` letters
    ///
    /// The standard opening book only applies to five-letter words.
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        let openers = if word_len == DEFAULT_WORD_LEN {
            OpeningBook::standard()
        } else {
            OpeningBook::empty()
        };

        Self {
            word_len,
            guess_budget: DEFAULT_GUESS_BUDGET,
            cutoff: Cutoff::default(),
            lookahead: None,
            openers,
        }
    }

    #[must_use]
    pub fn with_guess_budget(mut self, guess_budget: usize) -> Self {
        self.guess_budget = guess_budget;
        self
    }

    #[must_use]
    pub fn with_cutoff(mut self, cutoff: Cutoff) -> Self {
        self.cutoff = cutoff;
        self
    }

    #[must_use]
    pub fn with_lookahead(mut self, lookahead: Option<usize>) -> Self {
        self.lookahead = lookahead;
        self
    }

    #[must_use]
    pub fn with_openers(mut self, openers: OpeningBook) -> Self {
        self.openers = openers;
        self
    }
}
