//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod guess;
pub mod play;

pub use assist::{PromptOracle, run_assist};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use guess::run_guess;
pub use play::{PlayResult, pick_answer, run_play};

use crate::error::SolverError;
use std::io::{BufRead, Write};

const QUIT: &str = "quit";

/// Whether `err` means the user asked to stop
#[must_use]
pub fn is_quit(err: &SolverError) -> bool {
    matches!(err, SolverError::Io(reason) if reason == QUIT)
}

/// Write `prompt`, then read one trimmed line
///
/// Returns `Io` once the input is exhausted.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, SolverError> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SolverError::Io("input closed".to_string()));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_line_trims_and_echoes_the_prompt() {
        let mut input = Cursor::new("  crate \n");
        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "Guess").unwrap();
        assert_eq!(line, "crate");
        assert_eq!(String::from_utf8(output).unwrap(), "Guess: ");
    }

    #[test]
    fn quitting_is_recognised() {
        assert!(is_quit(&SolverError::Io(QUIT.to_string())));
        assert!(!is_quit(&SolverError::Io("input closed".to_string())));
        assert!(!is_quit(&SolverError::GameOver));
    }

    #[test]
    fn prompt_line_reports_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(matches!(
            prompt_line(&mut input, &mut output, "Guess"),
            Err(SolverError::Io(_))
        ));
    }
}
