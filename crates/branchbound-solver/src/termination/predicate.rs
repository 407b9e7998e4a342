//! Closure-backed termination.

use std::fmt::{self, Debug};

use super::Termination;
use crate::scope::SearchScope;

/// Terminates when a closure says so.
///
/// # Example
///
/// ```
/// use branchbound_solver::termination::FnTermination;
///
/// let term = FnTermination::new(|scope| scope.nodes_explored() > 10);
/// ```
pub struct FnTermination<F> {
    predicate: F,
}

impl<F> FnTermination<F>
where
    F: Fn(&SearchScope) -> bool + Send,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Debug for FnTermination<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTermination").finish()
    }
}

impl<F> Termination for FnTermination<F>
where
    F: Fn(&SearchScope) -> bool + Send,
{
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (self.predicate)(scope)
    }
}
