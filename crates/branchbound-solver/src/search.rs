//! Best-first branch-and-bound search.
//!
//! Logging levels:
//! - **INFO**: search start/end with counters
//! - **DEBUG**: best-solution improvements and why the loop stopped
//! - **TRACE**: every expansion

use std::cmp::Ordering;

use branchbound_config::{ConfigError, SearchConfig};
use branchbound_core::{BranchBoundError, Node};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, trace};

use crate::queue::MinMaxHeap;
use crate::result::{SearchResult, TerminationReason};
use crate::scope::SearchScope;
use crate::stats::SearchStats;
use crate::termination::{
    NoTermination, NodeCountTermination, OrTermination, SolutionCountTermination, Termination,
    TimeTermination,
};

/// Default initial capacity of the search queue.
const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Termination built from a [`SearchConfig`]: whichever configured limit
/// fires first.
pub type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<NodeCountTermination>,
    Option<SolutionCountTermination>,
)>;

/// Queue entry ordered by [`Node::compare`].
struct QueueEntry<N>(N);

impl<N: Node> PartialEq for QueueEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.compare(&other.0) == Ordering::Equal
    }
}

impl<N: Node> Eq for QueueEntry<N> {}

impl<N: Node> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.compare(&other.0)
    }
}

/// Best-first branch-and-bound engine.
///
/// Repeatedly expands the cheapest queued node until the cheapest node is a
/// solution. With pruning enabled, queued nodes that order after the best
/// known solution are dropped from the back of the queue after every
/// expansion; that is only sound when cost never decreases from parent to
/// child.
///
/// # Type Parameters
/// * `T` - The termination condition, polled once per expansion
///
/// # Example
///
/// ```
/// use branchbound_core::Node;
/// use branchbound_solver::BestFirstSearch;
///
/// /// Picks digits left to right; cost is the digit sum so far.
/// #[derive(Clone, Debug)]
/// struct Digits(Vec<u8>);
///
/// impl Node for Digits {
///     type Cost = u32;
///
///     fn cost(&self) -> u32 { self.0.iter().map(|&d| u32::from(d)).sum() }
///     fn is_solution(&self) -> bool { self.0.len() == 3 }
///     fn children(&self) -> impl Iterator<Item = Self> {
///         let open = self.0.len() < 3;
///         (1..=9u8).filter(move |_| open).map(move |d| {
///             let mut next = self.0.clone();
///             next.push(d);
///             Digits(next)
///         })
///     }
/// }
///
/// let result = BestFirstSearch::new().solve(Digits(vec![]), None);
/// assert!(result.optimal_found);
/// assert_eq!(result.best_cost(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct BestFirstSearch<T = NoTermination> {
    pruning: bool,
    termination: T,
    initial_queue_capacity: usize,
}

impl BestFirstSearch<NoTermination> {
    /// Creates an engine with pruning enabled and no termination.
    pub fn new() -> Self {
        Self {
            pruning: true,
            termination: NoTermination,
            initial_queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl Default for BestFirstSearch<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl BestFirstSearch<ConfiguredTermination> {
    /// Creates an engine from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails validation.
    pub fn from_config(config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let termination = config.termination.as_ref();
        let time = config.time_limit().map(TimeTermination::new);
        let nodes = termination
            .and_then(|t| t.node_count_limit)
            .map(NodeCountTermination::new);
        let solutions = termination
            .and_then(|t| t.solution_count_limit)
            .map(SolutionCountTermination::new);

        Ok(Self {
            pruning: config.pruning,
            termination: OrTermination((time, nodes, solutions)),
            initial_queue_capacity: config
                .initial_queue_capacity
                .unwrap_or(DEFAULT_QUEUE_CAPACITY),
        })
    }
}

impl<T> BestFirstSearch<T> {
    /// Enables or disables pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Replaces the termination condition.
    pub fn with_termination<U>(self, termination: U) -> BestFirstSearch<U> {
        BestFirstSearch {
            pruning: self.pruning,
            termination,
            initial_queue_capacity: self.initial_queue_capacity,
        }
    }

    /// Sets the initial queue capacity.
    pub fn with_initial_queue_capacity(mut self, capacity: usize) -> Self {
        self.initial_queue_capacity = capacity;
        self
    }

    /// Returns whether pruning is enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Returns the termination condition.
    pub fn termination(&self) -> &T {
        &self.termination
    }
}

impl<T: Termination> BestFirstSearch<T> {
    /// Searches from `start`, optionally seeded with a known solution.
    ///
    /// A seed must satisfy [`Node::is_solution`]; it bounds pruning from the
    /// first expansion and is returned unchanged if nothing beats it.
    pub fn solve<N: Node>(&self, start: N, seed: Option<N>) -> SearchResult<N> {
        self.run(start, seed, None)
    }

    /// Like [`solve`](Self::solve), also sending every improved best
    /// solution through `sender` as it is found.
    ///
    /// A dropped receiver does not stop the search.
    pub fn solve_with_channel<N: Node>(
        &self,
        start: N,
        seed: Option<N>,
        sender: &UnboundedSender<N>,
    ) -> SearchResult<N> {
        self.run(start, seed, Some(sender))
    }

    fn run<N: Node>(
        &self,
        start: N,
        seed: Option<N>,
        sender: Option<&UnboundedSender<N>>,
    ) -> SearchResult<N> {
        debug_assert!(seed.as_ref().map_or(true, |s| s.is_solution()));

        let mut scope = SearchScope::new();
        let mut queue = MinMaxHeap::with_capacity(self.initial_queue_capacity);
        let mut best = seed;

        info!(
            event = "search_start",
            pruning = self.pruning,
            seeded = best.is_some(),
            start_cost = ?start.cost()
        );

        if let Some(seed) = &best {
            queue.push(QueueEntry(seed.clone()));
            scope.stats_mut().record_enqueue();
        }
        queue.push(QueueEntry(start));
        scope.stats_mut().record_enqueue();
        scope.stats_mut().observe_queue_size(queue.len());

        let mut optimal_found = true;

        while let Some(QueueEntry(current)) = queue.pop_min_if(|entry| !entry.0.is_solution()) {
            debug_assert!(!current.is_solution(), "queue minimum popped as a solution");
            scope.stats_mut().record_expansion();
            trace!(
                event = "expand",
                cost = ?current.cost(),
                queue_size = queue.len() as u64
            );

            for child in current.children() {
                let improves = best.as_ref().map_or(true, |b| child.is_better_than(b));
                if child.is_solution() {
                    scope.stats_mut().record_solution();
                    if improves {
                        debug!(
                            event = "best_improved",
                            cost = ?child.cost(),
                            nodes_explored = scope.nodes_explored()
                        );
                        if let Some(sender) = sender {
                            let _ = sender.send(child.clone());
                        }
                        best = Some(child.clone());
                    }
                }
                if improves {
                    queue.push(QueueEntry(child));
                    scope.stats_mut().record_enqueue();
                }
            }
            scope.stats_mut().observe_queue_size(queue.len());

            if self.pruning {
                if let Some(best) = &best {
                    prune_worse_than(&mut queue, best, scope.stats_mut());
                }
            }

            if self.termination.is_terminated(&scope) {
                debug!(
                    event = "terminated",
                    nodes_explored = scope.nodes_explored(),
                    queue_size = queue.len() as u64
                );
                optimal_found = false;
                break;
            }
        }

        let reason = if !optimal_found {
            TerminationReason::Stopped
        } else if queue.is_empty() {
            TerminationReason::Exhausted
        } else {
            TerminationReason::ProvenOptimal
        };

        let stats = scope.finish();
        info!(
            event = "search_end",
            reason = %reason,
            optimal = optimal_found,
            best_cost = ?best.as_ref().map(Node::cost),
            nodes_explored = stats.nodes_explored,
            solutions_considered = stats.solutions_considered,
            peak_queue_size = stats.peak_queue_size as u64,
            pruned = stats.pruned_node_count,
            duration_ms = stats.elapsed_ms()
        );

        SearchResult {
            best,
            optimal_found,
            reason,
            stats,
        }
    }
}

/// Pops queued nodes from the back while they order after `best`.
fn prune_worse_than<N: Node>(
    queue: &mut MinMaxHeap<QueueEntry<N>>,
    best: &N,
    stats: &mut SearchStats,
) {
    while queue
        .pop_max_if(|entry| best.is_better_than(&entry.0))
        .is_some()
    {
        stats.record_prune();
    }
    debug_assert!(queue
        .peek_max()
        .map_or(true, |entry| !best.is_better_than(&entry.0)));
}

/// One-shot search request.
///
/// Collects the start node, optional seed and settings, then runs the
/// search. A request without a start node is rejected before any work.
///
/// # Example
///
/// ```
/// use branchbound_core::BranchBoundError;
/// use branchbound_solver::{SearchBuilder, termination::NodeCountTermination};
/// # use branchbound_core::Node;
/// # #[derive(Clone, Debug)]
/// # struct Leaf;
/// # impl Node for Leaf {
/// #     type Cost = u8;
/// #     fn cost(&self) -> u8 { 0 }
/// #     fn is_solution(&self) -> bool { false }
/// #     fn children(&self) -> impl Iterator<Item = Self> { std::iter::empty() }
/// # }
///
/// let err = SearchBuilder::<Leaf>::new()
///     .termination(NodeCountTermination::new(100))
///     .solve()
///     .unwrap_err();
/// assert!(matches!(err, BranchBoundError::InvalidArgument(_)));
/// ```
pub struct SearchBuilder<N, T = NoTermination> {
    engine: BestFirstSearch<T>,
    start: Option<N>,
    seed: Option<N>,
    sender: Option<UnboundedSender<N>>,
}

impl<N: Node> SearchBuilder<N, NoTermination> {
    /// Creates an empty request with default settings.
    pub fn new() -> Self {
        Self {
            engine: BestFirstSearch::new(),
            start: None,
            seed: None,
            sender: None,
        }
    }
}

impl<N: Node> Default for SearchBuilder<N, NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node, T> SearchBuilder<N, T> {
    /// Sets the node to search from.
    pub fn start(mut self, start: N) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets a known solution to bound the search from the outset.
    pub fn seed(mut self, seed: N) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables pruning.
    pub fn pruning(mut self, pruning: bool) -> Self {
        self.engine = self.engine.with_pruning(pruning);
        self
    }

    /// Sets the initial queue capacity.
    pub fn initial_queue_capacity(mut self, capacity: usize) -> Self {
        self.engine = self.engine.with_initial_queue_capacity(capacity);
        self
    }

    /// Streams improved best solutions through `sender`.
    pub fn improvements(mut self, sender: UnboundedSender<N>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the termination condition.
    pub fn termination<U>(self, termination: U) -> SearchBuilder<N, U> {
        SearchBuilder {
            engine: self.engine.with_termination(termination),
            start: self.start,
            seed: self.seed,
            sender: self.sender,
        }
    }
}

impl<N: Node, T: Termination> SearchBuilder<N, T> {
    /// Runs the search.
    ///
    /// # Errors
    ///
    /// Returns [`BranchBoundError::InvalidArgument`] if no start node was set.
    pub fn solve(self) -> branchbound_core::Result<SearchResult<N>> {
        let start = self.start.ok_or_else(|| {
            BranchBoundError::InvalidArgument("search requires a start node".to_string())
        })?;
        Ok(self.engine.run(start, self.seed, self.sender.as_ref()))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
