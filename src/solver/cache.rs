//! Memoised feedback and scores
//!
//! Search evaluates the same (answer, guess) pairs over and over across
//! branches. Entries never change once written, so the cache is a plain
//! append-only map owned by one game; nothing outlives it.

use crate::core::{Feedback, Word, evaluate};
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};

/// Hit/miss counters for an [`EvalCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Cache of feedback keyed by (answer, guess), and of scores keyed by feedback
#[derive(Debug, Default)]
pub struct EvalCache {
    feedback: RefCell<FxHashMap<(Word, Word), Feedback>>,
    scores: RefCell<FxHashMap<Feedback, i32>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl EvalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feedback revealed for `guess` when `answer` is hidden
    pub fn evaluate(&self, answer: &Word, guess: &Word) -> Feedback {
        let key = (answer.clone(), guess.clone());
        if let Some(&feedback) = self.feedback.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return feedback;
        }

        self.misses.set(self.misses.get() + 1);
        let feedback = evaluate(answer, guess);
        self.feedback.borrow_mut().insert(key, feedback);
        feedback
    }

    /// Score of a feedback value
    pub fn score(&self, feedback: Feedback) -> i32 {
        *self
            .scores
            .borrow_mut()
            .entry(feedback)
            .or_insert_with(|| feedback.score())
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.feedback.borrow().len(),
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}
