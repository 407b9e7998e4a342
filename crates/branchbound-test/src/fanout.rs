//! A wide, shallow tree.
//!
//! The root has `width` children, none of them solutions. Each of those has
//! a single solution child of the same cost. Expanding the root alone
//! therefore never reveals a solution.

use branchbound_core::Node;

/// A node of the fan-out tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanOutNode {
    width: u32,
    level: u8,
    cost: u32,
}

impl FanOutNode {
    /// Creates the root of a tree with `width` branches.
    pub fn root(width: u32) -> Self {
        Self {
            width,
            level: 0,
            cost: 0,
        }
    }

    /// Creates a standalone solution of the given cost, e.g. to seed a search.
    pub fn solution(cost: u32) -> Self {
        Self {
            width: 0,
            level: 2,
            cost,
        }
    }

    /// Returns the depth of this node.
    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Node for FanOutNode {
    type Cost = u32;

    fn cost(&self) -> u32 {
        self.cost
    }

    fn is_solution(&self) -> bool {
        self.level == 2
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let count = match self.level {
            0 => self.width,
            1 => 1,
            _ => 0,
        };
        let level = self.level + 1;
        let base = self.cost;
        (0..count).map(move |i| Self {
            width: 0,
            level,
            cost: if level == 1 { base + 1 + i } else { base },
        })
    }
}
