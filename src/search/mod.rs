//! Adversarial game-tree search
//!
//! Generic over any [`GameNode`]; the word game's board is one
//! implementation.

mod alphabeta;
mod minimax;
mod node;

#[cfg(test)]
mod testing;

pub use alphabeta::{Cutoff, SearchStats, alphabeta, alphabeta_with_stats, alphabeta_within};
pub use minimax::minimax;
pub use node::GameNode;
