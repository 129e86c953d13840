//! The node interface searched by minimax and alpha-beta

use std::cmp::Ordering;

/// A state in a two-player, zero-sum game tree
///
/// Nodes are compared only through `cmp_score`. The two sentinel
/// constructors produce nodes that are never expanded and whose scores lie
/// outside every real score; they seed the search bounds.
pub trait GameNode: Sized {
    /// Value of this node from the maximising player's point of view
    fn score(&self) -> i32;

    /// Terminal nodes are returned as-is by the search
    fn is_terminal(&self) -> bool;

    /// Whether the player to move is maximising
    fn is_maximising(&self) -> bool;

    /// Successor nodes, in a fixed order
    ///
    /// The sequence is finite. Terminal nodes yield nothing.
    fn children(&self) -> impl Iterator<Item = Self>;

    /// Sentinel scoring below every real node
    fn minimum(&self) -> Self;

    /// Sentinel scoring above every real node
    fn maximum(&self) -> Self;

    /// Total order by score
    fn cmp_score(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}
