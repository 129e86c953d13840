//! Explicit game trees for exercising the search in tests

use super::node::GameNode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub enum Tree {
    Leaf { id: u32, score: i32 },
    Max(Vec<Tree>),
    Min(Vec<Tree>),
    Bound(i32),
}

pub fn leaf(id: u32, score: i32) -> Tree {
    Tree::Leaf { id, score }
}

pub fn max(children: Vec<Tree>) -> Tree {
    Tree::Max(children)
}

pub fn min(children: Vec<Tree>) -> Tree {
    Tree::Min(children)
}

/// Alternating tree with 1-3 children per node and heavily tied leaf scores
pub fn random_tree(seed: u64, depth: usize) -> Tree {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut next_id = 0;
    grow(&mut rng, depth, true, &mut next_id)
}

fn grow(rng: &mut StdRng, depth: usize, maximising: bool, next_id: &mut u32) -> Tree {
    if depth == 0 || rng.random_range(0..8) == 0 {
        *next_id += 1;
        return leaf(*next_id, rng.random_range(0..5));
    }

    let width = rng.random_range(1..=3);
    let children = (0..width)
        .map(|_| grow(rng, depth - 1, !maximising, next_id))
        .collect();

    if maximising { max(children) } else { min(children) }
}

impl GameNode for Tree {
    fn score(&self) -> i32 {
        match self {
            Self::Leaf { score, .. } | Self::Bound(score) => *score,
            Self::Max(_) | Self::Min(_) => 0,
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Leaf { .. } | Self::Bound(_))
    }

    fn is_maximising(&self) -> bool {
        matches!(self, Self::Max(_))
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let children: &[Tree] = match self {
            Self::Max(children) | Self::Min(children) => children,
            _ => &[],
        };
        children.iter().cloned()
    }

    fn minimum(&self) -> Self {
        Self::Bound(-100)
    }

    fn maximum(&self) -> Self {
        Self::Bound(100)
    }
}
