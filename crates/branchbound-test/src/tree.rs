//! Reproducible random trees.
//!
//! Each node derives its children from a ChaCha stream keyed by the tree
//! seed and the node id, so the same [`TreeShape`] always yields the same
//! tree regardless of expansion order.

use std::cmp::Ordering;

use branchbound_core::Node;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Parameters of a random tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeShape {
    /// Seed for the whole tree.
    pub seed: u64,
    /// Depth at which nodes become solutions.
    pub max_depth: u32,
    /// Upper bound on children per node (a node may have none).
    pub max_branching: u32,
    /// Upper bound on the cost added by one step.
    pub max_step: u32,
}

/// A node of a random tree.
#[derive(Clone, Debug)]
pub struct RandomTreeNode {
    shape: TreeShape,
    id: u64,
    depth: u32,
    cost: u32,
}

impl RandomTreeNode {
    /// Creates the root of the tree described by `shape`.
    pub fn root(shape: TreeShape) -> Self {
        Self {
            shape,
            id: 0,
            depth: 0,
            cost: 0,
        }
    }

    /// Returns the node id, unique within its tree.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the depth of this node.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.shape.seed ^ self.id.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

impl Node for RandomTreeNode {
    type Cost = u32;

    fn cost(&self) -> u32 {
        self.cost
    }

    fn is_solution(&self) -> bool {
        self.depth == self.shape.max_depth
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let mut rng = self.rng();
        let count = if self.is_solution() {
            0
        } else {
            rng.random_range(0..=self.shape.max_branching)
        };
        let fan = u64::from(self.shape.max_branching) + 1;
        (0..count).map(move |i| Self {
            shape: self.shape,
            id: self.id.wrapping_mul(fan).wrapping_add(u64::from(i) + 1),
            depth: self.depth + 1,
            cost: self.cost + rng.random_range(0..=self.shape.max_step),
        })
    }

    /// Cost, then solutions first, then id, so ties never depend on
    /// insertion order.
    fn compare(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| other.is_solution().cmp(&self.is_solution()))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Cost of the cheapest solution in the tree, found by exhaustive walk.
pub fn brute_force_optimum(shape: TreeShape) -> Option<u32> {
    let mut best = None;
    let mut stack = vec![RandomTreeNode::root(shape)];
    while let Some(node) = stack.pop() {
        if node.is_solution() {
            best = Some(best.map_or(node.cost, |b: u32| b.min(node.cost)));
        } else {
            stack.extend(node.children());
        }
    }
    best
}

/// Number of nodes in the tree.
pub fn node_count(shape: TreeShape) -> u64 {
    let mut count = 0;
    let mut stack = vec![RandomTreeNode::root(shape)];
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children());
    }
    count
}
