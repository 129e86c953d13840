//! Candidate sets and feedback-driven reduction
//!
//! A `CandidateSet` is an immutable, sorted list of words. Reducing it never
//! mutates the original; every reduction returns a new set, so search
//! branches can hold their own sets without aliasing.

use super::feedback::{Feedback, Mark};
use super::word::Word;
use crate::error::SolverError;
use std::sync::Arc;

/// Words still consistent with every feedback seen so far
///
/// Enumeration order is lexicographic, which fixes the order children are
/// searched in and therefore which of several tied moves is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Arc<[Word]>,
}

impl CandidateSet {
    /// Build a set from any words, sorting and removing duplicates
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self {
            words: words.into(),
        }
    }

    /// Parse a set from text, requiring every word to have `word_len` letters
    ///
    /// # Errors
    /// Returns `InvalidWord` for malformed words and `InvalidLength` for
    /// words of the wrong length.
    pub fn parse<I, S>(words: I, word_len: usize) -> Result<Self, SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|text| {
                let word = Word::new(text.as_ref())?;
                if word.len() == word_len {
                    Ok(word)
                } else {
                    Err(SolverError::InvalidLength {
                        text: word.to_string(),
                        expected: word_len,
                        actual: word.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>, SolverError>>()?;
        Ok(Self::new(words))
    }

    /// The empty set
    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// A set holding exactly one word
    #[must_use]
    pub fn singleton(word: Word) -> Self {
        Self {
            words: Arc::from(vec![word]),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Find a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words
            .binary_search_by(|w| w.text().cmp(text))
            .ok()
            .map(|i| &self.words[i])
    }

    /// Reduce the set by a whole history of guesses and their feedback
    ///
    /// History is processed in order. All-correct feedback collapses the set
    /// to the guess that earned it.
    ///
    /// # Errors
    /// Returns `HistoryMismatch` if the two histories differ in length, and
    /// `InvalidLength` if a feedback does not cover its guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_alphabeta::core::{CandidateSet, Feedback, Word};
    ///
    /// let universe = CandidateSet::parse(["abbot", "motto", "today", "crate"], 5).unwrap();
    /// let guess = Word::new("motto").unwrap();
    /// let feedback: Feedback = ".=-..".parse().unwrap();
    ///
    /// let reduced = universe.prune(&[guess], &[feedback]).unwrap();
    /// let words: Vec<&str> = reduced.iter().map(Word::text).collect();
    /// assert_eq!(words, ["today"]);
    /// ```
    pub fn prune(&self, guesses: &[Word], feedbacks: &[Feedback]) -> Result<Self, SolverError> {
        if guesses.len() != feedbacks.len() {
            return Err(SolverError::HistoryMismatch {
                guesses: guesses.len(),
                feedbacks: feedbacks.len(),
            });
        }

        let mut reduced = self.clone();
        for (guess, &feedback) in guesses.iter().zip(feedbacks) {
            if guess.len() != feedback.len() {
                return Err(SolverError::InvalidLength {
                    text: feedback.to_string(),
                    expected: guess.len(),
                    actual: feedback.len(),
                });
            }
            if feedback.is_all_correct() {
                return Ok(Self::singleton(guess.clone()));
            }
            reduced = reduced.apply(guess, feedback);
        }
        Ok(reduced)
    }

    /// Reduce the set by a single guess and its feedback
    ///
    /// Re-applying a pair that has already been applied leaves the set
    /// unchanged.
    #[must_use]
    pub fn apply(&self, guess: &Word, feedback: Feedback) -> Self {
        debug_assert_eq!(guess.len(), feedback.len());

        if feedback.is_all_correct() {
            return Self::singleton(guess.clone());
        }

        let constraint = Constraint::new(guess, feedback);
        let words: Vec<Word> = self
            .words
            .iter()
            .filter(|word| constraint.admits(word))
            .cloned()
            .collect();

        Self {
            words: words.into(),
        }
    }
}

/// Per-position filter derived from one guess and its feedback
struct Constraint<'a> {
    guess: &'a Word,
    rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Letter must be at this position
    At(u8),
    /// Letter must appear, but not at this position
    Elsewhere(u8),
    /// Letter must not appear at all
    Absent(u8),
}

impl<'a> Constraint<'a> {
    fn new(guess: &'a Word, feedback: Feedback) -> Self {
        let letters = guess.bytes();
        let rules = letters
            .iter()
            .zip(feedback.marks())
            .map(|(&letter, mark)| match mark {
                Mark::Correct => Rule::At(letter),
                Mark::Present => Rule::Elsewhere(letter),
                Mark::Missing => {
                    // A letter marked Missing here but Correct/Present at another
                    // position was guessed more times than the answer holds it
                    let seen_elsewhere = letters
                        .iter()
                        .zip(feedback.marks())
                        .any(|(&other, m)| other == letter && m != Mark::Missing);
                    if seen_elsewhere {
                        Rule::Elsewhere(letter)
                    } else {
                        Rule::Absent(letter)
                    }
                }
            })
            .collect();

        Self { guess, rules }
    }

    fn admits(&self, word: &Word) -> bool {
        if word == self.guess {
            return false;
        }

        self.rules
            .iter()
            .zip(word.bytes())
            .all(|(rule, &actual)| match *rule {
                Rule::At(letter) => actual == letter,
                Rule::Elsewhere(letter) => actual != letter && word.has_letter(letter),
                Rule::Absent(letter) => !word.has_letter(letter),
            })
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feedback::evaluate;

    const WORDS: [&str; 15] = [
        "abbot", "scorn", "today", "rider", "dizzy", "crime", "rakes", "clear", "leech", "burnt",
        "monic", "motto", "noose", "maxim", "crate",
    ];

    fn universe() -> CandidateSet {
        CandidateSet::parse(WORDS, 5).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn fb(text: &str) -> Feedback {
        text.parse().unwrap()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.iter().map(Word::text).collect()
    }

    #[test]
    fn new_sorts_and_dedups() {
        let set: CandidateSet = ["today", "abbot", "today"].iter().map(|w| word(w)).collect();
        assert_eq!(texts(&set), ["abbot", "today"]);
        assert!(set.contains(&word("today")));
        assert!(!set.contains(&word("motto")));
        assert_eq!(set.get("abbot"), Some(&word("abbot")));
        assert_eq!(set.get("crate"), None);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            CandidateSet::parse(["crate", "cat"], 5),
            Err(SolverError::InvalidLength {
                expected: 5,
                actual: 3,
                ..
            })
        ));
        assert!(matches!(
            CandidateSet::parse(["cr4te"], 5),
            Err(SolverError::InvalidWord(_))
        ));
    }

    #[test]
    fn prune_all_correct_collapses_to_guess() {
        let got = universe().prune(&[word("motto")], &[fb("=====")]).unwrap();
        assert_eq!(texts(&got), ["motto"]);
    }

    #[test]
    fn prune_present_and_repeated_missing() {
        let got = universe().prune(&[word("motto")], &[fb(".--..")]).unwrap();
        assert_eq!(texts(&got), ["abbot"]);
    }

    #[test]
    fn prune_correct_and_present() {
        let got = universe().prune(&[word("motto")], &[fb(".=-..")]).unwrap();
        assert_eq!(texts(&got), ["today"]);
    }

    #[test]
    fn prune_removes_the_guess_itself() {
        let got = universe().apply(&word("crate"), fb("=--.-"));
        assert!(!got.contains(&word("crate")));
        assert_eq!(texts(&got), ["clear"]);
    }

    #[test]
    fn prune_missing_excludes_letter_everywhere() {
        let got = universe().apply(&word("abbot"), fb("....."));
        for w in &got {
            for letter in b"abot" {
                assert!(!w.has_letter(*letter), "{w}");
            }
        }
        assert!(got.contains(&word("rider")));
    }

    #[test]
    fn prune_is_idempotent() {
        let set = universe();
        for answer in WORDS {
            for guess in WORDS {
                let (answer, guess) = (word(answer), word(guess));
                let feedback = evaluate(&answer, &guess);
                let once = set.prune(&[guess.clone()], &[feedback]).unwrap();
                let twice = once.prune(&[guess.clone()], &[feedback]).unwrap();
                assert_eq!(once, twice, "{guess} {feedback}");
            }
        }
    }

    #[test]
    fn prune_keeps_the_answer() {
        let set = universe();
        for answer in WORDS {
            for guess in WORDS {
                let (answer, guess) = (word(answer), word(guess));
                let feedback = evaluate(&answer, &guess);
                let got = set.prune(&[guess.clone()], &[feedback]).unwrap();
                assert!(got.contains(&answer), "{answer} eliminated by {guess} {feedback}");
            }
        }
    }

    #[test]
    fn prune_over_a_history() {
        let answer = word("leech");
        let guesses = [word("crate"), word("noose")];
        let feedbacks: Vec<Feedback> = guesses.iter().map(|g| evaluate(&answer, g)).collect();

        let got = universe().prune(&guesses, &feedbacks).unwrap();
        assert!(got.contains(&answer));
        assert!(!got.contains(&word("crate")));
        assert!(!got.contains(&word("noose")));

        // Applying one pair at a time gives the same result
        let stepwise = universe()
            .apply(&guesses[0], feedbacks[0])
            .apply(&guesses[1], feedbacks[1]);
        assert_eq!(got, stepwise);
    }

    #[test]
    fn prune_rejects_mismatched_history() {
        assert!(matches!(
            universe().prune(&[word("crate")], &[]),
            Err(SolverError::HistoryMismatch {
                guesses: 1,
                feedbacks: 0
            })
        ));
        assert!(matches!(
            universe().prune(&[word("crate")], &[fb("...")]),
            Err(SolverError::InvalidLength { .. })
        ));
    }

    #[test]
    fn prune_does_not_touch_the_original() {
        let set = universe();
        let _ = set.apply(&word("motto"), fb(".--.."));
        assert_eq!(set.len(), WORDS.len());
    }
}
