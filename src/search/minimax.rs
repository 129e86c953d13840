//! Plain minimax, used as the reference for alpha-beta

use super::node::GameNode;
use std::cmp::Ordering;

/// Search every child of every node
///
/// A child replaces the current best only when strictly better, so the
/// earliest of several equal children is returned, as in alpha-beta.
pub fn minimax<N: GameNode>(node: N) -> N {
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
        let reply = minimax(child);
        let improves = if maximising {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        if reply.cmp_score(&best) == improves {
            best = reply;
        }
    }

    best
}
