//! The node contract searched by the best-first engine.

use std::cmp::Ordering;
use std::fmt::Debug;

/// One full or partial candidate solution in a search tree.
///
/// The engine only ever talks to a problem through this trait, using static
/// dispatch, so expansion stays monomorphic.
///
/// # Ordering
///
/// [`compare`](Node::compare) must be a consistent, transitive total order:
/// cost ascending first, and among equal costs solutions sort before
/// non-solutions. The engine stops as soon as the queue minimum is a
/// solution, so an order that breaks this rule yields undefined results
/// rather than an error.
///
/// # Pruning
///
/// Pruning discards queued nodes worse than the best solution. That is only
/// sound when cost never decreases from a parent to its children.
///
/// # Example
///
/// ```
/// use branchbound_core::Node;
///
/// #[derive(Clone, Debug)]
/// struct Countdown(u32);
///
/// impl Node for Countdown {
///     type Cost = u32;
///
///     fn cost(&self) -> u32 { 10 - self.0 }
///     fn is_solution(&self) -> bool { self.0 == 0 }
///     fn children(&self) -> impl Iterator<Item = Self> {
///         self.0.checked_sub(1).map(Countdown).into_iter()
///     }
/// }
///
/// assert!(Countdown(3).is_better_than(&Countdown(2)));
/// ```
pub trait Node: Clone {
    /// Cost type; lower is better.
    type Cost: Ord + Copy + Debug;

    /// Returns the cost (or bound) of this node.
    fn cost(&self) -> Self::Cost;

    /// Returns true if this node is a complete solution.
    fn is_solution(&self) -> bool;

    /// Produces the one-step refinements of this node.
    ///
    /// Called at most once per expansion; the iterator need not be
    /// restartable.
    fn children(&self) -> impl Iterator<Item = Self>;

    /// Total order used by the search queue.
    fn compare(&self, other: &Self) -> Ordering {
        self.cost()
            .cmp(&other.cost())
            .then_with(|| other.is_solution().cmp(&self.is_solution()))
    }

    /// Returns true if `self` orders strictly before `other`.
    #[inline]
    fn is_better_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}
