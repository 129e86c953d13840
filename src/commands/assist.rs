//! Interactive assistant
//!
//! The solver suggests guesses for a game played elsewhere; the user types
//! the feedback the real game showed.

use super::{QUIT, prompt_line};
use crate::core::{Feedback, Word};
use crate::error::SolverError;
use crate::solver::{GameOutcome, Oracle, Solver};
use std::io::{BufRead, Write};

/// Largest candidate list printed in full
const LIST_LIMIT: usize = 10;

/// Oracle that asks a person for feedback
///
/// Lines that do not parse are reported and asked again. `win` stands for
/// all-correct feedback; `quit` ends the game with an `Io` error.
pub struct PromptOracle<R, W> {
    input: R,
    output: W,
    word_len: usize,
}

impl<R: BufRead, W: Write> PromptOracle<R, W> {
    pub fn new(input: R, output: W, word_len: usize) -> Self {
        Self {
            input,
            output,
            word_len,
        }
    }

    /// Give back the writer, for inspecting what was shown
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<(), SolverError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Oracle for PromptOracle<R, W> {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, SolverError> {
        let prompt = format!("Feedback for {} (. - =, win, quit)", guess.text().to_uppercase());
        loop {
            let line = prompt_line(&mut self.input, &mut self.output, &prompt)?;
            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Err(SolverError::Io(QUIT.to_string())),
                "win" | "solved" => return Ok(Feedback::all_correct(self.word_len)),
                text => match Feedback::parse(text, self.word_len) {
                    Ok(feedback) => return Ok(feedback),
                    Err(e) => self.say(&format!("Invalid feedback: {e}"))?,
                },
            }
        }
    }
}

/// Suggest guesses until the user reports a win or the budget runs out
///
/// Feedback that contradicts earlier feedback is rejected and asked again.
///
/// # Errors
/// Returns `Io` when the user quits or input fails, and any error the
/// solver raises while choosing a guess.
pub fn run_assist<R: BufRead, W: Write>(
    solver: &mut Solver,
    oracle: &mut PromptOracle<R, W>,
) -> Result<GameOutcome, SolverError> {
    while !solver.is_over() {
        let guess = solver.next_guess()?;
        let remaining = solver.candidates();

        oracle.say(&format!(
            "Turn {}: {} candidates remaining",
            solver.board().ply() + 1,
            remaining.len()
        ))?;
        if remaining.len() <= LIST_LIMIT {
            let list: Vec<&str> = remaining.iter().map(Word::text).collect();
            oracle.say(&format!("  {}", list.join(" ")))?;
        }
        oracle.say(&format!("Suggested guess: {}", guess.text().to_uppercase()))?;

        loop {
            let feedback = oracle.feedback(&guess)?;
            match solver.apply_feedback(feedback) {
                Ok(()) => break,
                Err(SolverError::EmptyCandidateSet) => {
                    oracle.say("No word fits that feedback; please check it")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    let outcome = solver.outcome();
    if outcome.solved {
        oracle.say(&format!("Solved in {} guesses", outcome.guess_count()))?;
    } else {
        oracle.say("Out of guesses")?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateSet;
    use crate::solver::SolverConfig;
    use std::io::Cursor;

    fn solver() -> Solver {
        let universe = CandidateSet::parse(
            ["abbot", "clear", "crate", "crime", "leech", "motto", "today"],
            5,
        )
        .unwrap();
        Solver::new(universe, SolverConfig::default()).unwrap()
    }

    fn oracle(script: &str) -> PromptOracle<Cursor<String>, Vec<u8>> {
        PromptOracle::new(Cursor::new(script.to_string()), Vec::new(), 5)
    }

    #[test]
    fn bad_lines_are_asked_again() {
        let mut oracle = oracle("..x..\n....\n.-=..\n");
        let guess = Word::new("crate").unwrap();
        assert_eq!(oracle.feedback(&guess).unwrap().to_string(), ".-=..");

        let shown = String::from_utf8(oracle.into_output()).unwrap();
        assert_eq!(shown.matches("Invalid feedback").count(), 2);
        assert!(shown.contains("Feedback for CRATE"));
    }

    #[test]
    fn win_and_quit() {
        let mut oracle = oracle("WIN\nquit\n");
        let guess = Word::new("crate").unwrap();
        assert!(oracle.feedback(&guess).unwrap().is_all_correct());
        assert!(matches!(oracle.feedback(&guess), Err(SolverError::Io(_))));
        assert!(matches!(oracle.feedback(&guess), Err(SolverError::Io(_))));
    }

    #[test]
    fn assist_follows_the_feedback() {
        // crate against leech, then leech
        let mut solver = solver();
        let mut oracle = oracle("-...-\nwin\n");
        let outcome = run_assist(&mut solver, &mut oracle).unwrap();

        assert!(outcome.solved);
        let guesses: Vec<&str> = outcome.guesses().map(Word::text).collect();
        assert_eq!(guesses, ["crate", "leech"]);

        let shown = String::from_utf8(oracle.into_output()).unwrap();
        assert!(shown.contains("Suggested guess: CRATE"));
        assert!(shown.contains("Solved in 2 guesses"));
    }

    #[test]
    fn contradictory_feedback_is_rejected() {
        let mut solver = solver();
        let mut oracle = oracle("=....\n-...-\nwin\n");
        let outcome = run_assist(&mut solver, &mut oracle).unwrap();
        assert!(outcome.solved);

        let shown = String::from_utf8(oracle.into_output()).unwrap();
        assert!(shown.contains("No word fits that feedback"));
    }
}
