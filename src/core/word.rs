//! Word representation
//!
//! A Word is an immutable lowercase ASCII word. Clones share the same
//! allocation, so words can be copied freely between search branches.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Longest word the packed feedback encoding can hold (3^20 fits in a u32)
pub const MAX_WORD_LEN: usize = 20;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A lowercase word, ordered lexicographically
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must have 1 to {MAX_WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

#[allow(clippy::len_without_is_empty)] // Words are never empty
impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. Length checks against the game's word length
    /// happen where the word is used, not here.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is 0 or above `MAX_WORD_LEN`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_alphabeta::core::Word;
    ///
    /// let word = Word::new("Crate").unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("cr4te").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text: text.into() })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the word contains a letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.bytes().contains(&letter)
    }

    /// Count of each letter, indexed from `a`
    ///
    /// Used as the per-letter budget when computing feedback.
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in self.bytes() {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of a lowercase letter in `0..26`
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
