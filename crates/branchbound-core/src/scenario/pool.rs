//! Free-list of recyclable scenarios.

use std::fmt::{self, Debug};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::{Scenario, VariableIndex};

/// Recycles [`Scenario`] instances that share one [`VariableIndex`].
///
/// Every instance is either on the free list or owned by exactly one
/// caller. [`take`](Self::take) moves an instance out, and
/// [`release`](Self::release) moves it back. Contents are never cleared in
/// between.
///
/// A pool is single-writer. Concurrent search workers each keep their own
/// pool; the `Arc`'d index is the only thing they share.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use branchbound_core::{ScenarioPool, VariableIndex};
///
/// let index = Arc::new(VariableIndex::new(["a", "b"]).unwrap());
/// let mut pool: ScenarioPool<&str, i32> = ScenarioPool::new(index);
///
/// let mut scenario = pool.take();
/// scenario.set(&"b", 7).unwrap();
/// let id = scenario.id();
/// pool.release(scenario);
///
/// // The same instance comes back, still holding its old contents.
/// let scenario = pool.take();
/// assert_eq!(scenario.id(), id);
/// assert_eq!(scenario.get(&"b"), Ok(&7));
/// ```
pub struct ScenarioPool<V, A> {
    index: Arc<VariableIndex<V>>,
    free: Vec<Scenario<V, A>>,
    created: u64,
}

impl<V, A> ScenarioPool<V, A> {
    /// Creates an empty pool bound to `index`.
    pub fn new(index: Arc<VariableIndex<V>>) -> Self {
        Self {
            index,
            free: Vec::new(),
            created: 0,
        }
    }

    /// Creates an empty pool whose free list can hold `capacity` instances
    /// without reallocating.
    pub fn with_capacity(index: Arc<VariableIndex<V>>, capacity: usize) -> Self {
        Self {
            index,
            free: Vec::with_capacity(capacity),
            created: 0,
        }
    }

    /// Returns the shared variable index.
    pub fn index(&self) -> &Arc<VariableIndex<V>> {
        &self.index
    }

    /// Number of instances currently on the free list.
    #[inline]
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Number of instances this pool has ever constructed.
    #[inline]
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Returns a scenario to the free list.
    ///
    /// The instance must have been taken from this pool.
    #[inline]
    pub fn release(&mut self, scenario: Scenario<V, A>) {
        debug_assert!(
            Arc::ptr_eq(&scenario.index, &self.index),
            "scenario released into a foreign pool"
        );
        self.free.push(scenario);
    }
}

impl<V, A> ScenarioPool<V, A>
where
    A: Default + Clone,
{
    /// Checks out a scenario.
    ///
    /// Pops the most recently released instance in O(1), or builds a new one
    /// when the free list is empty. Recycled contents are left as they were.
    #[inline]
    pub fn take(&mut self) -> Scenario<V, A> {
        match self.free.pop() {
            Some(scenario) => scenario,
            None => self.construct(),
        }
    }

    /// Checks out a scenario that releases itself when dropped.
    pub fn take_scoped(&mut self) -> PooledScenario<'_, V, A> {
        let scenario = self.take();
        PooledScenario {
            pool: self,
            scenario: Some(scenario),
        }
    }

    /// Builds instances until `count` are available.
    pub fn prefill(&mut self, count: usize) {
        while self.free.len() < count {
            let scenario = self.construct();
            self.free.push(scenario);
        }
    }

    fn construct(&mut self) -> Scenario<V, A> {
        let id = self.created;
        self.created += 1;
        Scenario::new(id, Arc::clone(&self.index))
    }
}

impl<V, A> Debug for ScenarioPool<V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioPool")
            .field("variables", &self.index.len())
            .field("available", &self.free.len())
            .field("created", &self.created)
            .finish()
    }
}

/// A checked-out scenario that goes back to its pool on drop.
///
/// Returned by [`ScenarioPool::take_scoped`]. This is an opt-in alternative
/// to the explicit take/release protocol; both hand out the same instances.
pub struct PooledScenario<'a, V, A> {
    pool: &'a mut ScenarioPool<V, A>,
    scenario: Option<Scenario<V, A>>,
}

impl<V, A> PooledScenario<'_, V, A> {
    /// Detaches the scenario so it is not released on drop.
    pub fn into_inner(mut self) -> Scenario<V, A> {
        match self.scenario.take() {
            Some(scenario) => scenario,
            None => unreachable!("pooled scenario already detached"),
        }
    }
}

impl<V, A> Deref for PooledScenario<'_, V, A> {
    type Target = Scenario<V, A>;

    fn deref(&self) -> &Scenario<V, A> {
        match &self.scenario {
            Some(scenario) => scenario,
            None => unreachable!("pooled scenario already detached"),
        }
    }
}

impl<V, A> DerefMut for PooledScenario<'_, V, A> {
    fn deref_mut(&mut self) -> &mut Scenario<V, A> {
        match &mut self.scenario {
            Some(scenario) => scenario,
            None => unreachable!("pooled scenario already detached"),
        }
    }
}

impl<V, A> Drop for PooledScenario<'_, V, A> {
    fn drop(&mut self) {
        if let Some(scenario) = self.scenario.take() {
            self.pool.release(scenario);
        }
    }
}

impl<V, A: Debug> Debug for PooledScenario<'_, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PooledScenario").field(&self.scenario).finish()
    }
}
