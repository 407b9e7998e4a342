//! Per-run search state visible to termination conditions.

use std::time::{Duration, Instant};

use crate::stats::SearchStats;

/// Running state of one search, handed to
/// [`Termination::is_terminated`](crate::termination::Termination::is_terminated)
/// once per outer iteration.
#[derive(Debug, Clone)]
pub struct SearchScope {
    start_time: Instant,
    stats: SearchStats,
}

impl SearchScope {
    /// Starts the clock for a new run.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            stats: SearchStats::default(),
        }
    }

    /// Returns when the run started.
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Returns the time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the counters so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the counters mutably.
    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Returns the number of nodes expanded so far.
    pub fn nodes_explored(&self) -> u64 {
        self.stats.nodes_explored
    }

    /// Returns the number of solutions seen so far.
    pub fn solutions_considered(&self) -> u64 {
        self.stats.solutions_considered
    }

    /// Stamps the elapsed time and returns the final counters.
    pub(crate) fn finish(mut self) -> SearchStats {
        self.stats.elapsed = self.start_time.elapsed();
        self.stats
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}
