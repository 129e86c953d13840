//! Human guesser against a hidden answer
//!
//! The user types guesses; each is checked for length and vocabulary
//! membership before it is scored.

use super::{QUIT, prompt_line};
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{AnswerOracle, GameOutcome, Oracle, Solver};
use std::io::{BufRead, Write};

/// Play a game where the user guesses and `oracle` holds the answer
///
/// Typing `hint` shows the solver's suggestion without playing it.
/// Invalid guesses are reported and asked again.
///
/// # Errors
/// Returns `Io` when the user quits or input fails.
pub fn run_guess<R: BufRead, W: Write>(
    solver: &mut Solver,
    oracle: &mut AnswerOracle,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome, SolverError> {
    let budget = solver.config().guess_budget;

    while !solver.is_over() {
        let prompt = format!("Guess {}/{budget}", solver.board().ply() + 1);
        let line = prompt_line(input, output, &prompt)?.to_lowercase();

        match line.as_str() {
            "quit" | "q" | "exit" => return Err(SolverError::Io(QUIT.to_string())),
            "hint" => {
                let mut preview = solver.clone();
                let hint = preview.next_guess()?;
                writeln!(
                    output,
                    "Hint: {} ({} candidates)",
                    hint.text().to_uppercase(),
                    solver.candidates().len()
                )?;
                continue;
            }
            _ => {}
        }

        let guess = match Word::new(&line).map_err(SolverError::from) {
            Ok(word) => solver.submit_guess(word.clone()).map(|()| word),
            Err(e) => Err(e),
        };
        let guess = match guess {
            Ok(word) => word,
            Err(
                e @ (SolverError::InvalidWord(_)
                | SolverError::InvalidLength { .. }
                | SolverError::UnknownVocabularyWord(_)),
            ) => {
                writeln!(output, "{e}")?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let feedback = oracle.feedback(&guess)?;
        solver.apply_feedback(feedback)?;
        writeln!(
            output,
            "{} {} {}  {} candidates",
            guess.text().to_uppercase(),
            feedback,
            feedback.to_emoji(),
            solver.candidates().len()
        )?;
    }

    let outcome = solver.outcome();
    if outcome.solved {
        writeln!(output, "Solved in {} guesses", outcome.guess_count())?;
    } else {
        writeln!(
            output,
            "Out of guesses; the word was {}",
            oracle.answer().text().to_uppercase()
        )?;
    }
    Ok(outcome)
}
