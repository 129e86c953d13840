//! Core domain types for the word game
//!
//! Words, feedback and candidate sets. Everything here is pure: no I/O, no
//! shared mutable state, and every operation returns a new value.

mod candidates;
mod feedback;
mod word;

pub use candidates::CandidateSet;
pub use feedback::{Feedback, Mark, evaluate};
pub use word::{MAX_WORD_LEN, Word, WordError};
