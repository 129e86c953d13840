//! Minimax with alpha-beta pruning
//!
//! The search returns the node reached at the end of the chosen line of
//! play, not just its score, so callers can read the moves that lead there.
//!
//! # Ties
//! A child replaces the current best only when it is strictly better, so
//! among equal scores the earliest child in iteration order is kept.
//! Under [`Cutoff::Soft`] a node stops as soon as its best reaches the
//! bound; [`Cutoff::Hard`] keeps searching until the bound is strictly
//! passed. With sentinel bounds both modes return the node plain minimax
//! returns. Inside a narrower window they may not.

use super::node::GameNode;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// When a node stops searching its remaining children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cutoff {
    /// Prune once the best score reaches the bound (`>=` / `<=`)
    #[default]
    Soft,
    /// Prune only once the best score passes the bound (`>` / `<`)
    Hard,
}

impl Cutoff {
    /// Whether `high` is far enough above `low` to prune
    #[inline]
    const fn prunes(self, high: i32, low: i32) -> bool {
        match self {
            Self::Soft => high >= low,
            Self::Hard => high > low,
        }
    }
}

impl FromStr for Cutoff {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown cutoff '{other}' (use 'soft' or 'hard')")),
        }
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Soft => f.write_str("soft"),
            Self::Hard => f.write_str("hard"),
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including terminal ones
    pub nodes: u64,
    /// Times a node stopped before its last child
    pub cutoffs: u64,
}

/// Search `node` with bounds seeded from its own sentinels
///
/// # Examples
/// ```
/// use wordle_alphabeta::core::CandidateSet;
/// use wordle_alphabeta::search::{Cutoff, GameNode, alphabeta};
/// use wordle_alphabeta::solver::Board;
///
/// let universe = CandidateSet::parse(["abbot", "motto", "today"], 5).unwrap();
/// let board = Board::new(universe, 6);
///
/// let best = alphabeta(board.clone(), Cutoff::Soft);
/// assert_eq!(best.guesses().len(), best.feedbacks().len());
/// assert!(best.score() > 0);
/// ```
pub fn alphabeta<N: GameNode>(node: N, cutoff: Cutoff) -> N {
    let mut stats = SearchStats::default();
    alphabeta_with_stats(node, cutoff, &mut stats)
}

/// Same as [`alphabeta`], recording counters into `stats`
pub fn alphabeta_with_stats<N: GameNode>(node: N, cutoff: Cutoff, stats: &mut SearchStats) -> N {
    let alpha = node.minimum();
    let beta = node.maximum();
    alphabeta_within(node, &alpha, &beta, cutoff, stats)
}

/// Search `node` inside the window `(alpha, beta)` given as bound nodes
///
/// With sentinel bounds this is a full search. A narrower window returns an
/// exact result only when the true value lies inside it.
pub fn alphabeta_within<N: GameNode>(
    node: N,
    alpha: &N,
    beta: &N,
    cutoff: Cutoff,
    stats: &mut SearchStats,
) -> N {
    search(node, alpha.score(), beta.score(), cutoff, stats)
}

fn search<N: GameNode>(
    node: N,
    mut alpha: i32,
    mut beta: i32,
    cutoff: Cutoff,
    stats: &mut SearchStats,
) -> N {
    stats.nodes += 1;

    if node.is_terminal() {
        return node;
    }

    let maximising = node.is_maximising();
    let mut best = if maximising {
        node.minimum()
    } else {
        node.maximum()
    };

    for child in node.children() {
        let reply = search(child, alpha, beta, cutoff, stats);

        if maximising {
            if reply.cmp_score(&best) == Ordering::Greater {
                best = reply;
            }
            if cutoff.prunes(best.score(), beta) {
                stats.cutoffs += 1;
                break;
            }
            alpha = alpha.max(best.score());
        } else {
            if reply.cmp_score(&best) == Ordering::Less {
                best = reply;
            }
            if cutoff.prunes(alpha, best.score()) {
                stats.cutoffs += 1;
                break;
            }
            beta = beta.min(best.score());
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax;
    use crate::search::testing::{Tree, leaf, max, min, random_tree};

    fn label(node: &Tree) -> u32 {
        match node {
            Tree::Leaf { id, .. } => *id,
            _ => panic!("expected a leaf, got {node:?}"),
        }
    }

    #[test]
    fn terminal_root_is_returned() {
        let root = leaf(7, 3);
        assert_eq!(label(&alphabeta(root, Cutoff::Soft)), 7);
    }

    #[test]
    fn picks_the_best_worst_case() {
        // Max chooses between two min nodes: worst cases 3 and 2
        let root = max(vec![
            min(vec![leaf(1, 3), leaf(2, 12), leaf(3, 8)]),
            min(vec![leaf(4, 2), leaf(5, 4), leaf(6, 6)]),
        ]);

        for cutoff in [Cutoff::Soft, Cutoff::Hard] {
            let best = alphabeta(root.clone(), cutoff);
            assert_eq!(best.score(), 3);
            assert_eq!(label(&best), 1);
        }
    }

    #[test]
    fn prunes_refuted_siblings() {
        let root = max(vec![
            min(vec![leaf(1, 3), leaf(2, 12), leaf(3, 8)]),
            min(vec![leaf(4, 2), leaf(5, 4), leaf(6, 6)]),
        ]);

        let mut stats = SearchStats::default();
        let _ = alphabeta_with_stats(root, Cutoff::Hard, &mut stats);

        // The second min node stops after its first leaf (2 < 3)
        assert_eq!(stats.cutoffs, 1);
        assert_eq!(stats.nodes, 1 + 4 + 2);
    }

    #[test]
    fn soft_cutoff_skips_tied_siblings() {
        let root = max(vec![leaf(1, 5), min(vec![leaf(2, 5), leaf(3, 5)])]);

        let mut soft_stats = SearchStats::default();
        let soft = alphabeta_with_stats(root.clone(), Cutoff::Soft, &mut soft_stats);
        let mut hard_stats = SearchStats::default();
        let hard = alphabeta_with_stats(root.clone(), Cutoff::Hard, &mut hard_stats);

        assert_eq!(soft.score(), hard.score());
        assert_eq!(soft.score(), minimax(root).score());

        // The min node ties the first leaf, so the earlier line is kept
        assert_eq!(label(&soft), 1);
        assert_eq!(label(&hard), 1);

        // Soft pruning never visits leaf 3
        assert_eq!(soft_stats.nodes, 4);
        assert_eq!(hard_stats.nodes, 5);
    }

    #[test]
    fn earlier_ties_win() {
        let root = max(vec![leaf(1, 4), leaf(2, 4), leaf(3, 1)]);
        let root_min = min(vec![leaf(1, 1), leaf(2, 4), leaf(3, 1)]);

        for cutoff in [Cutoff::Soft, Cutoff::Hard] {
            assert_eq!(label(&alphabeta(root.clone(), cutoff)), 1);
            assert_eq!(label(&alphabeta(root_min.clone(), cutoff)), 1);
        }
    }

    #[test]
    fn agrees_with_minimax_on_random_trees() {
        for seed in 0..200 {
            let root = random_tree(seed, 4);
            let expected = minimax(root.clone());

            for cutoff in [Cutoff::Soft, Cutoff::Hard] {
                let got = alphabeta(root.clone(), cutoff);
                assert_eq!(got.score(), expected.score(), "seed {seed} {cutoff}");
                assert_eq!(label(&got), label(&expected), "seed {seed} {cutoff}");
            }
        }
    }

    #[test]
    fn childless_nodes_return_their_sentinel() {
        let root = max(vec![]);
        assert_eq!(alphabeta(root, Cutoff::Soft).score(), -100);

        let root = min(vec![]);
        assert_eq!(alphabeta(root, Cutoff::Hard).score(), 100);
    }

    #[test]
    fn narrow_window_fails_high() {
        // With beta at 5 the root stops at the first leaf reaching it
        let root = max(vec![leaf(1, 5), leaf(2, 7)]);
        let mut stats = SearchStats::default();

        let (alpha, beta) = (Tree::Bound(-100), Tree::Bound(5));

        let soft = alphabeta_within(root.clone(), &alpha, &beta, Cutoff::Soft, &mut stats);
        assert_eq!(label(&soft), 1);

        let hard = alphabeta_within(root, &alpha, &beta, Cutoff::Hard, &mut stats);
        assert_eq!(label(&hard), 2);
    }

    #[test]
    fn cutoff_parsing() {
        assert_eq!("soft".parse::<Cutoff>(), Ok(Cutoff::Soft));
        assert_eq!("HARD".parse::<Cutoff>(), Ok(Cutoff::Hard));
        assert!("medium".parse::<Cutoff>().is_err());
        assert_eq!(Cutoff::default(), Cutoff::Soft);
        assert_eq!(Cutoff::Hard.to_string(), "hard");
    }
}
