//! Feedback calculation and representation
//!
//! Feedback marks every letter of a guess as one of:
//! - `.` Missing (letter not in the answer, or already used up)
//! - `-` Present (letter in the answer at another position)
//! - `=` Correct (letter in the correct position)
//!
//! Feedback is stored packed as a base-3 number, where each position
//! contributes digit × 3^position, together with its length.

use super::word::{MAX_WORD_LEN, Word, letter_index};
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Missing,
    Present,
    Correct,
}

impl Mark {
    /// Textual symbol used for fixtures and interactive input
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Missing => '.',
            Self::Present => '-',
            Self::Correct => '=',
        }
    }

    /// Parse a textual symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Missing),
            '-' => Some(Self::Present),
            '=' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Contribution of this mark to a feedback score
    #[must_use]
    pub const fn weight(self) -> i32 {
        match self {
            Self::Missing => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn digit(self) -> u32 {
        match self {
            Self::Missing => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Missing,
        }
    }
}

/// Feedback for one guess, positionally aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    code: u32,
    len: u8,
}

#[allow(clippy::len_without_is_empty)] // Feedback always covers a whole word
impl Feedback {
    /// Build feedback from individual marks
    ///
    /// # Panics
    /// Panics in debug mode if more than `MAX_WORD_LEN` marks are given
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(
            (1..=MAX_WORD_LEN).contains(&marks.len()),
            "feedback must cover 1 to {MAX_WORD_LEN} letters"
        );

        let mut code = 0u32;
        let mut multiplier = 1u32;
        for mark in marks {
            code += mark.digit() * multiplier;
            multiplier *= 3;
        }

        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// Feedback with every letter correct
    #[must_use]
    pub const fn all_correct(len: usize) -> Self {
        Self {
            code: 3u32.pow(len as u32) - 1,
            len: len as u8,
        }
    }

    /// Calculate the feedback when `guess` is played and `answer` is hidden
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact match Correct and take that letter
    ///    out of the answer's per-letter budget
    /// 2. Second pass, left to right over the remaining positions: mark
    ///    Present while the letter still has budget, otherwise Missing
    ///
    /// Per letter, Correct + Present never exceeds its count in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_alphabeta::core::{Feedback, Word};
    ///
    /// let guess = Word::new("jetty").unwrap();
    /// let answer = Word::new("thump").unwrap();
    ///
    /// // Only the first T is present, the second one is missing
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "..-..");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must have equal length");

        let mut marks = [Mark::Missing; MAX_WORD_LEN];
        let mut budget = answer.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.bytes().iter().zip(answer.bytes()).enumerate() {
            if g == a {
                marks[i] = Mark::Correct;
                budget[letter_index(g)] -= 1;
            }
        }

        // Second pass: letters elsewhere in the answer, while budget remains
        for (i, &g) in guess.bytes().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            let remaining = &mut budget[letter_index(g)];
            if *remaining > 0 {
                marks[i] = Mark::Present;
                *remaining -= 1;
            }
        }

        Self::from_marks(&marks[..guess.len()])
    }

    /// Parse feedback text, requiring exactly `expected_len` symbols
    ///
    /// # Errors
    /// Returns `InvalidLength` for the wrong number of symbols and
    /// `InvalidFeedbackSymbol` for anything outside `.`, `-`, `=`.
    pub fn parse(text: &str, expected_len: usize) -> Result<Self, SolverError> {
        let text = text.trim();
        let actual = text.chars().count();
        if actual != expected_len || actual == 0 || actual > MAX_WORD_LEN {
            return Err(SolverError::InvalidLength {
                text: text.to_string(),
                expected: expected_len,
                actual,
            });
        }

        let marks = text
            .chars()
            .map(|symbol| {
                Mark::from_symbol(symbol).ok_or_else(|| SolverError::InvalidFeedbackSymbol {
                    text: text.to_string(),
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_marks(&marks))
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// The mark at a position
    ///
    /// # Panics
    /// Panics in debug mode if position >= `len()`
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        debug_assert!(position < self.len());
        Mark::from_digit((self.code / 3u32.pow(position as u32)) % 3)
    }

    /// Marks in positional order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        (0..self.len()).map(move |i| self.mark(i))
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub const fn is_all_correct(self) -> bool {
        self.code == 3u32.pow(self.len as u32) - 1
    }

    /// Weighted sum of the marks: Missing 0, Present 1, Correct 2
    ///
    /// All-correct feedback has the highest score for its length.
    ///
    /// # Examples
    /// ```
    /// use wordle_alphabeta::core::Feedback;
    ///
    /// let feedback: Feedback = "-..=.".parse().unwrap();
    /// assert_eq!(feedback.score(), 3);
    /// ```
    #[must_use]
    pub fn score(self) -> i32 {
        self.marks().map(Mark::weight).sum()
    }

    /// Convert to an emoji string like "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Missing => '⬜',
            })
            .collect()
    }
}

/// Feedback revealed for `guess` when `answer` is hidden
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> Feedback {
    Feedback::calculate(guess, answer)
}

impl FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.trim().chars().count();
        Self::parse(s, len.clamp(1, MAX_WORD_LEN))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks().try_for_each(|mark| write!(f, "{}", mark.symbol()))
    }
}
