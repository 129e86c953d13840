//! Fixed opening moves
//!
//! Searching the first guess over a full vocabulary is the most expensive
//! step of a game, and its answer never changes, so it is looked up instead.

use super::board::Board;
use crate::core::{Feedback, Word};
use log::debug;
use std::collections::VecDeque;

const STANDARD_OPENER: &str = "crate";

/// Second guesses after the standard opener, keyed by its feedback
const STANDARD_REPLIES: [(&str, &str); 3] = [
    (".....", "bingo"),
    ("-....", "block"),
    ("....-", "begin"),
];

/// Ordered opening guesses plus replies to the first feedback
///
/// The k-th opener belongs to the turn with k guesses already on the board.
/// It is consumed once that turn is asked about, whether or not it was still
/// a candidate, and dropped unseen if the turn passes without asking. A
/// reply is only offered on the second turn, after the book's own opener
/// was played.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    openers: VecDeque<Word>,
    next_ply: usize,
    replies: Vec<(Feedback, Word)>,
    opened: Option<Word>,
}

impl OpeningBook {
    /// Book that plays `openers` in order and has no replies
    pub fn new(openers: impl IntoIterator<Item = Word>) -> Self {
        Self {
            openers: openers.into_iter().collect(),
            next_ply: 0,
            replies: Vec::new(),
            opened: None,
        }
    }

    /// Book with no moves; every guess is searched
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Opener `crate` with replies for its three most common misses
    #[must_use]
    pub fn standard() -> Self {
        let openers = Word::new(STANDARD_OPENER).ok();
        let replies = STANDARD_REPLIES
            .iter()
            .filter_map(|(feedback, reply)| {
                Some((feedback.parse::<Feedback>().ok()?, Word::new(reply).ok()?))
            });

        let mut book = Self::new(openers);
        book.replies.extend(replies);
        book
    }

    /// Add a second guess played when the first feedback is `first`
    #[must_use]
    pub fn with_reply(mut self, first: Feedback, reply: Word) -> Self {
        self.replies.push((first, reply));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.openers.is_empty() && self.replies.is_empty()
    }

    /// Every word the book may play
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.openers
            .iter()
            .chain(self.replies.iter().map(|(_, reply)| reply))
    }

    /// Guess to play on `board` without searching, if the book has one
    pub fn suggest(&mut self, board: &Board) -> Option<Word> {
        let ply = board.guesses().len();

        while self.next_ply < ply {
            let Some(skipped) = self.openers.pop_front() else {
                break;
            };
            debug!("opener '{skipped}' skipped, turn {} already played", self.next_ply + 1);
            self.next_ply += 1;
        }

        let opener = if self.next_ply == ply {
            self.openers.pop_front()
        } else {
            None
        };
        if let Some(opener) = opener {
            self.next_ply += 1;
            if board.candidates().contains(&opener) {
                if ply == 0 {
                    self.opened = Some(opener.clone());
                }
                return Some(opener);
            }
            debug!("opener '{opener}' is no longer a candidate");
            return None;
        }

        let [first] = board.feedbacks() else {
            return None;
        };
        if self.opened.as_ref() != board.guesses().first() {
            return None;
        }
        self.replies
            .iter()
            .find(|(feedback, reply)| feedback == first && board.candidates().contains(reply))
            .map(|(_, reply)| reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateSet;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn board(words: &[&str]) -> Board {
        Board::new(CandidateSet::parse(words, 5).unwrap(), 6)
    }

    #[test]
    fn standard_book_opens_with_crate() {
        let mut book = OpeningBook::standard();
        let root = board(&["bingo", "block", "begin", "crate", "motto"]);
        assert_eq!(book.suggest(&root), Some(word("crate")));

        // The opener is used up
        assert_eq!(book.suggest(&root), None);
    }

    #[test]
    fn replies_follow_the_first_feedback() {
        let root = board(&["bingo", "block", "begin", "crate", "motto"]);

        let mut book = OpeningBook::standard();
        let _ = book.suggest(&root);
        let after = root.play(&word("crate")).reveal(&word("bingo")).unwrap();
        assert_eq!(after.feedbacks()[0].to_string(), ".....");
        assert_eq!(book.suggest(&after), Some(word("bingo")));

        let mut book = OpeningBook::standard();
        let _ = book.suggest(&root);
        let after = root.play(&word("crate")).reveal(&word("block")).unwrap();
        assert_eq!(after.feedbacks()[0].to_string(), "-....");
        assert_eq!(book.suggest(&after), Some(word("block")));
    }

    #[test]
    fn stale_moves_are_skipped() {
        let mut book = OpeningBook::standard();
        let root = board(&["motto", "today"]);
        assert_eq!(book.suggest(&root), None);

        // A reply for a feedback that was not seen is never offered
        let after = root.play(&word("motto")).reveal(&word("today")).unwrap();
        assert_eq!(book.suggest(&after), None);
    }

    #[test]
    fn replies_need_the_book_opener() {
        let root = board(&["bingo", "block", "crate", "dizzy"]);

        // "dizzy" scores "....." against "bingo" too, but was not the opener
        let mut book = OpeningBook::standard();
        let _ = book.suggest(&root);
        let after = root.play(&word("dizzy")).reveal(&word("block")).unwrap();
        assert_eq!(after.feedbacks()[0].to_string(), ".....");
        assert_eq!(book.suggest(&after), None);
    }

    #[test]
    fn openers_only_fit_their_own_turn() {
        let root = board(&["abbot", "crate", "motto", "today"]);
        let after_two = root
            .play(&word("motto"))
            .reveal(&word("abbot"))
            .unwrap()
            .play(&word("today"))
            .reveal(&word("abbot"))
            .unwrap();

        // Asked first on the third turn, the book has nothing to offer
        let mut book = OpeningBook::standard();
        assert_eq!(book.suggest(&after_two), None);
        assert_eq!(book.suggest(&root), None);

        // A second opener waits for the second turn
        let mut book = OpeningBook::new([word("motto"), word("today")]);
        assert_eq!(book.suggest(&root), Some(word("motto")));
        let after_one = root.play(&word("motto")).reveal(&word("today")).unwrap();
        assert_eq!(book.suggest(&after_one), Some(word("today")));
        assert_eq!(book.suggest(&after_one), None);

        // Skipping the second turn drops its opener
        let mut book = OpeningBook::new([word("motto"), word("today")]);
        assert_eq!(book.suggest(&root), Some(word("motto")));
        assert_eq!(book.suggest(&after_two), None);
    }

    #[test]
    fn custom_book() {
        let mut book = OpeningBook::new([word("motto"), word("today")])
            .with_reply(".=-..".parse().unwrap(), word("abbot"));
        assert!(!book.is_empty());
        assert_eq!(book.words().count(), 3);

        let root = board(&["abbot", "motto", "today"]);
        assert_eq!(book.suggest(&root), Some(word("motto")));
        assert!(OpeningBook::empty().is_empty());
    }
}
