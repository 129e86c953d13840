//! Game state as a node of the adversarial search tree
//!
//! A board alternates between two players. When guesses and feedbacks are
//! equally long the guesser is to move and every candidate is a possible
//! next guess. Otherwise a guess is pending and nature answers it: every
//! candidate is a possible hidden answer, each revealing its own feedback.

use super::cache::EvalCache;
use crate::core::{CandidateSet, Feedback, Word};
use crate::error::SolverError;
use crate::search::GameNode;
use std::fmt;
use std::rc::Rc;

/// Score of the lower search bound
pub const MINIMUM_SCORE: i32 = -100;
/// Score of the upper search bound
pub const MAXIMUM_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Active,
    Minimum,
    Maximum,
}

/// Guess and feedback history together with the words still possible
///
/// Boards are never mutated; every move returns a new board. The feedback
/// cache is shared by all boards derived from the same root.
#[derive(Debug, Clone)]
pub struct Board {
    kind: Kind,
    candidates: CandidateSet,
    guesses: Vec<Word>,
    feedbacks: Vec<Feedback>,
    guess_budget: usize,
    horizon: usize,
    cache: Rc<EvalCache>,
}

impl Board {
    /// Start a game over `universe` allowing `guess_budget` guesses
    #[must_use]
    pub fn new(universe: CandidateSet, guess_budget: usize) -> Self {
        Self {
            kind: Kind::Active,
            candidates: universe,
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            guess_budget,
            horizon: guess_budget,
            cache: Rc::new(EvalCache::new()),
        }
    }

    /// Copy of this board whose subtree stops `lookahead` guesses from now
    ///
    /// `None` searches until the guess budget runs out. A lookahead of zero
    /// is treated as one.
    #[must_use]
    pub fn with_lookahead(&self, lookahead: Option<usize>) -> Self {
        let horizon = lookahead.map_or(self.guess_budget, |ahead| {
            (self.feedbacks.len() + ahead.max(1)).min(self.guess_budget)
        });
        Self {
            horizon,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.feedbacks
    }

    #[must_use]
    pub const fn guess_budget(&self) -> usize {
        self.guess_budget
    }

    /// Number of feedbacks received so far
    #[must_use]
    pub fn ply(&self) -> usize {
        self.feedbacks.len()
    }

    /// The guess waiting for feedback, if any
    #[must_use]
    pub fn pending_guess(&self) -> Option<&Word> {
        self.guesses.get(self.feedbacks.len())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedbacks.last().is_some_and(|fb| fb.is_all_correct())
    }

    /// Whether this is one of the two search bounds rather than a real game
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.kind != Kind::Active
    }

    #[must_use]
    pub fn cache(&self) -> &EvalCache {
        &self.cache
    }

    /// Board after guessing `guess`
    ///
    /// Only meaningful while the guesser is to move.
    #[must_use]
    pub fn play(&self, guess: &Word) -> Self {
        debug_assert!(self.pending_guess().is_none());
        let mut guesses = self.guesses.clone();
        guesses.push(guess.clone());
        Self {
            guesses,
            ..self.clone()
        }
    }

    /// Board after nature reveals `answer` as the hidden word
    ///
    /// # Errors
    /// Returns `NoPendingGuess` when the guesser is to move.
    pub fn reveal(&self, answer: &Word) -> Result<Self, SolverError> {
        let guess = self.pending_guess().ok_or(SolverError::NoPendingGuess)?;
        let feedback = self.cache.evaluate(answer, guess);
        Ok(self.advance(guess, feedback))
    }

    /// Board after recording real feedback for the pending guess
    ///
    /// # Errors
    /// Returns `NoPendingGuess` when no guess is waiting, and
    /// `InvalidLength` when the feedback does not cover the guess.
    pub fn record(&self, feedback: Feedback) -> Result<Self, SolverError> {
        let guess = self.pending_guess().ok_or(SolverError::NoPendingGuess)?;
        if feedback.len() != guess.len() {
            return Err(SolverError::InvalidLength {
                text: feedback.to_string(),
                expected: guess.len(),
                actual: feedback.len(),
            });
        }
        Ok(self.advance(guess, feedback))
    }

    fn advance(&self, guess: &Word, feedback: Feedback) -> Self {
        let mut feedbacks = self.feedbacks.clone();
        feedbacks.push(feedback);
        Self {
            kind: Kind::Active,
            candidates: self.candidates.apply(guess, feedback),
            guesses: self.guesses.clone(),
            feedbacks,
            guess_budget: self.guess_budget,
            horizon: self.horizon,
            cache: Rc::clone(&self.cache),
        }
    }

    fn bound(&self, kind: Kind) -> Self {
        Self {
            kind,
            candidates: CandidateSet::empty(),
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            guess_budget: self.guess_budget,
            horizon: self.horizon,
            cache: Rc::clone(&self.cache),
        }
    }
}

impl GameNode for Board {
    fn score(&self) -> i32 {
        match self.kind {
            Kind::Minimum => MINIMUM_SCORE,
            Kind::Maximum => MAXIMUM_SCORE,
            Kind::Active => self
                .feedbacks
                .last()
                .map_or(0, |&feedback| self.cache.score(feedback)),
        }
    }

    fn is_terminal(&self) -> bool {
        if self.is_sentinel() || self.is_solved() {
            return true;
        }
        let ply = self.feedbacks.len();
        ply >= self.guess_budget || (self.is_maximising() && ply >= self.horizon)
    }

    fn is_maximising(&self) -> bool {
        self.guesses.len() == self.feedbacks.len()
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let words = if self.is_terminal() {
            &[][..]
        } else {
            self.candidates.as_slice()
        };
        let pending = self.pending_guess();

        words.iter().map(move |word| match pending {
            None => self.play(word),
            Some(guess) => self.advance(guess, self.cache.evaluate(word, guess)),
        })
    }

    fn minimum(&self) -> Self {
        self.bound(Kind::Minimum)
    }

    fn maximum(&self) -> Self {
        self.bound(Kind::Maximum)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Minimum => return write!(f, "<minimum {MINIMUM_SCORE}>"),
            Kind::Maximum => return write!(f, "<maximum {MAXIMUM_SCORE}>"),
            Kind::Active => {}
        }

        let remaining = self.candidates.len();
        if self.guesses.is_empty() {
            return write!(f, "{remaining:>6}");
        }

        let last = self.guesses.len() - 1;
        for (row, guess) in self.guesses.iter().enumerate() {
            match self.feedbacks.get(row) {
                Some(feedback) => write!(f, "{guess} {feedback}")?,
                None => write!(f, "{guess} {:width$}", "", width = guess.len())?,
            }
            if row == last {
                write!(f, "{remaining:>6}")?;
            } else {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
