//! Count-based termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates after a number of node expansions.
#[derive(Debug, Clone, Copy)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.nodes_explored() >= self.limit
    }
}

/// Terminates once a number of solutions have been considered.
///
/// Useful for "first good enough" searches where optimality is not needed.
#[derive(Debug, Clone, Copy)]
pub struct SolutionCountTermination {
    limit: u64,
}

impl SolutionCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for SolutionCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.solutions_considered() >= self.limit
    }
}
