//! Solver against a hidden answer
//!
//! Plays a whole game with no human input and returns the solution path.

use crate::core::{CandidateSet, Word};
use crate::error::SolverError;
use crate::solver::{AnswerOracle, GameOutcome, Solver, SolverConfig};
use rand::prelude::IndexedRandom;

/// Result of playing one word
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub answer: Word,
    pub outcome: GameOutcome,
}

/// The hidden answer: `answer` if given, otherwise a random word of `universe`
///
/// # Errors
/// Returns `InvalidWord` for malformed text, `AimNotInVocabulary` if the
/// word is not in `universe`, and `EmptyCandidateSet` if there is nothing to
/// choose from.
pub fn pick_answer(answer: Option<&str>, universe: &CandidateSet) -> Result<Word, SolverError> {
    let Some(text) = answer else {
        return universe
            .as_slice()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(SolverError::EmptyCandidateSet);
    };

    let word = Word::new(text)?;
    if universe.contains(&word) {
        Ok(word)
    } else {
        Err(SolverError::AimNotInVocabulary(word.to_string()))
    }
}

/// Let the solver play against `answer`
///
/// # Errors
/// Returns the errors of [`Solver::new`], `AimNotInVocabulary` if the answer
/// is not in `universe`, and `EmptyCandidateSet` should the game reach a
/// dead end.
pub fn run_play(
    universe: CandidateSet,
    config: SolverConfig,
    answer: &Word,
) -> Result<PlayResult, SolverError> {
    let mut oracle = AnswerOracle::new(answer.clone(), &universe)?;
    let mut solver = Solver::new(universe, config)?;
    let outcome = solver.run(&mut oracle)?;

    Ok(PlayResult {
        answer: answer.clone(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::builtin;

    fn universe() -> CandidateSet {
        CandidateSet::parse(["abbot", "crate", "leech", "motto", "today"], 5).unwrap()
    }

    #[test]
    fn pick_named_answer() {
        let answer = pick_answer(Some("LEECH"), &universe()).unwrap();
        assert_eq!(answer.text(), "leech");

        assert_eq!(
            pick_answer(Some("zebra"), &universe()).unwrap_err(),
            SolverError::AimNotInVocabulary("zebra".to_string())
        );
        assert!(matches!(
            pick_answer(Some("z3bra"), &universe()),
            Err(SolverError::InvalidWord(_))
        ));
    }

    #[test]
    fn pick_random_answer() {
        let universe = universe();
        let answer = pick_answer(None, &universe).unwrap();
        assert!(universe.contains(&answer));

        assert_eq!(
            pick_answer(None, &CandidateSet::empty()).unwrap_err(),
            SolverError::EmptyCandidateSet
        );
    }

    #[test]
    fn play_solves_the_answer() {
        let answer = Word::new("today").unwrap();
        let result = run_play(universe(), SolverConfig::default(), &answer).unwrap();

        assert!(result.outcome.solved);
        assert_eq!(result.outcome.guesses().last(), Some(&answer));
        assert_eq!(result.outcome.guesses().next().map(Word::text), Some("crate"));
    }

    #[test]
    fn play_on_the_builtin_list() {
        let universe = builtin(5).unwrap();
        let answer = Word::new("crate").unwrap();
        let result = run_play(universe, SolverConfig::default(), &answer).unwrap();
        assert!(result.outcome.solved);
        assert_eq!(result.outcome.guess_count(), 1);
    }
}
