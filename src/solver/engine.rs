//! Main solver interface

use super::board::Board;
use super::config::SolverConfig;
use super::openers::OpeningBook;
use super::oracle::Oracle;
use crate::core::{CandidateSet, Feedback, Word};
use crate::error::SolverError;
use crate::search::{GameNode, SearchStats, alphabeta_with_stats};
use log::{debug, info, warn};
use std::fmt;

/// Where a guess came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// Taken from the opening book
    Opener,
    /// Chosen by search; `score` is the worst case it guarantees
    Search { score: i32, nodes: u64, cutoffs: u64 },
    /// Supplied by the caller
    Manual,
}

impl fmt::Display for GuessSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opener => f.write_str("opener"),
            Self::Search { score, nodes, .. } => write!(f, "search, score {score}, {nodes} nodes"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

/// A single guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub source: GuessSource,
}

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub turns: Vec<Turn>,
    pub solved: bool,
}

impl GameOutcome {
    /// Number of guesses played
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }

    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.turns.iter().map(|turn| &turn.guess)
    }

    pub fn feedbacks(&self) -> impl Iterator<Item = Feedback> {
        self.turns.iter().map(|turn| turn.feedback)
    }
}

/// Plays one game: picks guesses, takes feedback and narrows the candidates
///
/// Guesses come from the opening book while it has a usable move, and from
/// alpha-beta search over the current board otherwise.
#[derive(Debug, Clone)]
pub struct Solver {
    universe: CandidateSet,
    board: Board,
    openers: OpeningBook,
    config: SolverConfig,
    turns: Vec<Turn>,
    pending: Option<GuessSource>,
}

impl Solver {
    /// Create a solver for a game over `universe`
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` for an empty universe and `InvalidLength`
    /// if a universe or opening book word is not `config.word_len` long.
    pub fn new(universe: CandidateSet, config: SolverConfig) -> Result<Self, SolverError> {
        if universe.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        let expected = config.word_len;
        if let Some(word) = universe
            .iter()
            .chain(config.openers.words())
            .find(|word| word.len() != expected)
        {
            return Err(SolverError::InvalidLength {
                text: word.to_string(),
                expected,
                actual: word.len(),
            });
        }

        debug!(
            "solver over {} words: budget {}, {} cutoff, lookahead {:?}",
            universe.len(),
            config.guess_budget,
            config.cutoff,
            config.lookahead
        );

        Ok(Self {
            board: Board::new(universe.clone(), config.guess_budget),
            openers: config.openers.clone(),
            universe,
            config,
            turns: Vec::new(),
            pending: None,
        })
    }

    /// Every word the game started with
    #[must_use]
    pub fn universe(&self) -> &CandidateSet {
        &self.universe
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Words still consistent with every feedback so far
    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        self.board.candidates()
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Whether the game is solved or out of guesses
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Choose the next guess and hold it until its feedback arrives
    ///
    /// Asking again before feedback is applied returns the same guess.
    ///
    /// # Errors
    /// Returns `GameOver` once the game has ended, and `EmptyCandidateSet`
    /// if no word is left to guess.
    pub fn next_guess(&mut self) -> Result<Word, SolverError> {
        if let Some(guess) = self.board.pending_guess() {
            return Ok(guess.clone());
        }
        if self.is_over() {
            return Err(SolverError::GameOver);
        }
        if self.candidates().is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        let (guess, source) = match self.openers.suggest(&self.board) {
            Some(guess) => (guess, GuessSource::Opener),
            None => self.search()?,
        };

        info!(
            "guess {}: {guess} ({source}, {} candidates)",
            self.board.ply() + 1,
            self.candidates().len()
        );
        self.board = self.board.play(&guess);
        self.pending = Some(source);
        Ok(guess)
    }

    /// Play a guess chosen outside the solver
    ///
    /// # Errors
    /// Returns `InvalidLength` or `UnknownVocabularyWord` for a guess that
    /// cannot be played, `GameOver` once the game has ended, and
    /// `HistoryMismatch` while another guess still waits for feedback.
    pub fn submit_guess(&mut self, guess: Word) -> Result<(), SolverError> {
        if self.is_over() {
            return Err(SolverError::GameOver);
        }
        if self.board.pending_guess().is_some() {
            return Err(SolverError::HistoryMismatch {
                guesses: self.board.guesses().len() + 1,
                feedbacks: self.board.feedbacks().len(),
            });
        }
        if guess.len() != self.config.word_len {
            return Err(SolverError::InvalidLength {
                text: guess.to_string(),
                expected: self.config.word_len,
                actual: guess.len(),
            });
        }
        if !self.universe.contains(&guess) {
            return Err(SolverError::UnknownVocabularyWord(guess.to_string()));
        }

        info!("guess {}: {guess} (manual)", self.board.ply() + 1);
        self.board = self.board.play(&guess);
        self.pending = Some(GuessSource::Manual);
        Ok(())
    }

    /// Record the feedback for the pending guess
    ///
    /// On error the game is left as it was.
    ///
    /// # Errors
    /// Returns `NoPendingGuess` if nothing was guessed, `InvalidLength` for
    /// feedback of the wrong length, and `EmptyCandidateSet` if the feedback
    /// contradicts everything seen before.
    pub fn apply_feedback(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let guess = self
            .board
            .pending_guess()
            .cloned()
            .ok_or(SolverError::NoPendingGuess)?;
        if feedback.len() != self.config.word_len {
            return Err(SolverError::InvalidLength {
                text: feedback.to_string(),
                expected: self.config.word_len,
                actual: feedback.len(),
            });
        }

        let next = self.board.record(feedback)?;
        if next.candidates().is_empty() {
            warn!("feedback {feedback} for '{guess}' leaves no candidates");
            return Err(SolverError::EmptyCandidateSet);
        }

        let turn = Turn {
            candidates_before: self.candidates().len(),
            candidates_after: next.candidates().len(),
            source: self.pending.take().unwrap_or(GuessSource::Manual),
            guess,
            feedback,
        };
        debug!(
            "{} {}: {} -> {} candidates",
            turn.guess, turn.feedback, turn.candidates_before, turn.candidates_after
        );

        self.turns.push(turn);
        self.board = next;
        Ok(())
    }

    /// Play until the game is over, asking `oracle` for every feedback
    ///
    /// # Errors
    /// Propagates oracle errors and the errors of
    /// [`apply_feedback`](Self::apply_feedback).
    pub fn run<O: Oracle + ?Sized>(&mut self, oracle: &mut O) -> Result<GameOutcome, SolverError> {
        while !self.is_over() {
            let guess = self.next_guess()?;
            let feedback = oracle.feedback(&guess)?;
            self.apply_feedback(feedback)?;
        }

        let outcome = self.outcome();
        info!(
            "{} after {} guesses",
            if outcome.solved { "solved" } else { "failed" },
            outcome.guess_count()
        );
        Ok(outcome)
    }

    /// The game so far
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            turns: self.turns.clone(),
            solved: self.is_solved(),
        }
    }

    fn search(&self) -> Result<(Word, GuessSource), SolverError> {
        let root = self.board.with_lookahead(self.config.lookahead);
        let ply = root.ply();
        let mut stats = SearchStats::default();

        let best = alphabeta_with_stats(root, self.config.cutoff, &mut stats);

        let cache = self.board.cache().stats();
        debug!(
            "searched {} nodes ({} cutoffs) from ply {ply}, score {}; cache {} entries, {} hits",
            stats.nodes,
            stats.cutoffs,
            best.score(),
            cache.entries,
            cache.hits
        );

        let guess = best
            .guesses()
            .get(ply)
            .cloned()
            .ok_or(SolverError::EmptyCandidateSet)?;
        let source = GuessSource::Search {
            score: best.score(),
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
        };
        Ok((guess, source))
    }
}
