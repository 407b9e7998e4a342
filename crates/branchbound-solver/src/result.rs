//! Search outcome.

use std::fmt;

use branchbound_core::Node;

use crate::stats::SearchStats;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The queue minimum was a solution, so nothing left can beat it.
    ProvenOptimal,
    /// The queue ran dry without a solution at its minimum.
    Exhausted,
    /// The termination condition fired first.
    Stopped,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::ProvenOptimal => write!(f, "ProvenOptimal"),
            TerminationReason::Exhausted => write!(f, "Exhausted"),
            TerminationReason::Stopped => write!(f, "Stopped"),
        }
    }
}

/// Result of a best-first search.
///
/// `best` is the best solution observed during the run, or the seed if
/// nothing beat it. It is `None` when no solution was found within budget;
/// that is not an error.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    /// Best solution observed.
    pub best: Option<N>,
    /// True unless the termination condition cut the run short.
    pub optimal_found: bool,
    /// Why the run ended.
    pub reason: TerminationReason,
    /// Run counters.
    pub stats: SearchStats,
}

impl<N> SearchResult<N> {
    /// Returns the best solution, if any.
    pub fn best(&self) -> Option<&N> {
        self.best.as_ref()
    }

    /// Consumes the result, returning the best solution.
    pub fn into_best(self) -> Option<N> {
        self.best
    }

    /// Returns the number of solutions considered.
    pub fn solutions_considered(&self) -> u64 {
        self.stats.solutions_considered
    }

    /// Returns the number of nodes expanded.
    pub fn nodes_explored(&self) -> u64 {
        self.stats.nodes_explored
    }

    /// Returns the largest queue length observed.
    pub fn peak_queue_size(&self) -> usize {
        self.stats.peak_queue_size
    }

    /// Returns the number of pruned nodes.
    pub fn pruned_node_count(&self) -> u64 {
        self.stats.pruned_node_count
    }
}

impl<N: Node> SearchResult<N> {
    /// Returns the cost of the best solution, if any.
    pub fn best_cost(&self) -> Option<N::Cost> {
        self.best.as_ref().map(Node::cost)
    }
}
