//! Sources of real feedback for the solver's guesses

use crate::core::{CandidateSet, Feedback, Word};
use crate::error::SolverError;
use std::collections::VecDeque;

/// Something that knows the hidden answer and reveals feedback for guesses
///
/// Calls may block, for example while a person types a reply.
pub trait Oracle {
    /// Feedback for `guess`
    ///
    /// # Errors
    /// Implementations return an error when no feedback can be produced.
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, SolverError>;
}

impl<F> Oracle for F
where
    F: FnMut(&Word) -> Result<Feedback, SolverError>,
{
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, SolverError> {
        self(guess)
    }
}

/// Oracle holding the answer itself
#[derive(Debug, Clone)]
pub struct AnswerOracle {
    answer: Word,
}

impl AnswerOracle {
    /// Hide `answer`, which must be one of the words in play
    ///
    /// # Errors
    /// Returns `AimNotInVocabulary` if `universe` lacks the answer.
    pub fn new(answer: Word, universe: &CandidateSet) -> Result<Self, SolverError> {
        if universe.contains(&answer) {
            Ok(Self { answer })
        } else {
            Err(SolverError::AimNotInVocabulary(answer.to_string()))
        }
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }
}

impl Oracle for AnswerOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, SolverError> {
        Ok(Feedback::calculate(guess, &self.answer))
    }
}

/// Oracle replaying a fixed list of feedback, ignoring the guesses
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    script: VecDeque<Feedback>,
}

impl ScriptedOracle {
    pub fn new(script: impl IntoIterator<Item = Feedback>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Oracle for ScriptedOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, SolverError> {
        self.script
            .pop_front()
            .ok_or_else(|| SolverError::Io(format!("no scripted feedback left for '{guess}'")))
    }
}
