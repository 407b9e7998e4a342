//! Time-based termination.

use std::time::{Duration, Instant};

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once the run has been going for a time limit.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use branchbound_solver::termination::TimeTermination;
///
/// // Terminate after 30 seconds
/// let term = TimeTermination::new(Duration::from_secs(30));
///
/// // Or use convenience constructors
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.elapsed() >= self.limit
    }
}

/// Terminates at a fixed wall-clock instant, regardless of when the run
/// started.
#[derive(Debug, Clone)]
pub struct DeadlineTermination {
    deadline: Instant,
}

impl DeadlineTermination {
    pub fn new(deadline: Instant) -> Self {
        Self { deadline }
    }

    /// Deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self::new(Instant::now() + timeout)
    }
}

impl Termination for DeadlineTermination {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        Instant::now() >= self.deadline
    }
}
