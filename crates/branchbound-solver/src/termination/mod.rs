//! Termination conditions for a search run.
//!
//! Wall-clock limits and explicit cancellation are the same thing to the
//! engine: a predicate polled once per dequeued node.

mod composite;
mod count;
mod external;
mod predicate;
mod time;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use composite::{AndTermination, OrTermination};
pub use count::{NodeCountTermination, SolutionCountTermination};
pub use external::ExternalTermination;
pub use predicate::FnTermination;
pub use time::{DeadlineTermination, TimeTermination};

/// Trait for determining when to stop searching.
///
/// Checked once per outer iteration, after the dequeued node has been fully
/// expanded and the queue pruned, so a deadline can be overrun by at most one
/// expansion.
pub trait Termination: Send + Debug {
    /// Returns true if the search should stop now.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

/// Marker type indicating no termination.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        false
    }
}

impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        match self {
            Some(t) => t.is_terminated(scope),
            None => false,
        }
    }
}

impl<T: Termination + Sync + ?Sized> Termination for &T {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (**self).is_terminated(scope)
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (**self).is_terminated(scope)
    }
}

#[cfg(test)]
mod tests;
