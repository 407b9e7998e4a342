//! Search statistics (zero-erasure).
//!
//! Stack-allocated counters updated by the engine on its hot path.

use std::time::Duration;

/// Counters describing one search run.
///
/// # Example
///
/// ```
/// use branchbound_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_enqueue();
/// stats.record_enqueue();
/// stats.record_expansion();
/// stats.observe_queue_size(4);
/// stats.observe_queue_size(2);
///
/// assert_eq!(stats.nodes_explored, 1);
/// assert_eq!(stats.nodes_enqueued, 2);
/// assert_eq!(stats.peak_queue_size, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Children seen that were complete solutions.
    pub solutions_considered: u64,
    /// Nodes popped from the queue and expanded.
    pub nodes_explored: u64,
    /// Nodes pushed onto the queue, including start and seed.
    pub nodes_enqueued: u64,
    /// Largest queue length observed.
    pub peak_queue_size: usize,
    /// Nodes discarded by pruning.
    pub pruned_node_count: u64,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Records an expansion.
    #[inline]
    pub fn record_expansion(&mut self) {
        self.nodes_explored += 1;
    }

    /// Records a push onto the queue.
    #[inline]
    pub fn record_enqueue(&mut self) {
        self.nodes_enqueued += 1;
    }

    /// Records a solution seen among children.
    #[inline]
    pub fn record_solution(&mut self) {
        self.solutions_considered += 1;
    }

    /// Records a pruned node.
    #[inline]
    pub fn record_prune(&mut self) {
        self.pruned_node_count += 1;
    }

    /// Raises the peak queue size to `len` if larger.
    #[inline]
    pub fn observe_queue_size(&mut self, len: usize) {
        self.peak_queue_size = self.peak_queue_size.max(len);
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    /// Returns the expansion rate.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_explored as f64 / secs) as u64
        } else {
            0
        }
    }
}
