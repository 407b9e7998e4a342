//! Pooled partial assignments.
//!
//! A [`Scenario`] is a fixed-size table of assignment values addressed by a
//! dense integer index. The index comes from a [`VariableIndex`] built once
//! at setup and shared read-only by every scenario of a [`ScenarioPool`].
//!
//! Constraint-style node models take a scenario from their pool whenever a
//! child assignment must be materialized and release it once the node is
//! gone, so expansion does not allocate in steady state.

mod pool;

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use crate::error::ScenarioError;

pub use pool::{PooledScenario, ScenarioPool};

/// Dense, injective mapping from variables to `0..len`.
///
/// # Example
///
/// ```
/// use branchbound_core::VariableIndex;
///
/// let index = VariableIndex::new(["x", "y", "z"]).unwrap();
/// assert_eq!(index.index_of(&"y"), Some(1));
/// assert_eq!(index.variable_at(2), Some(&"z"));
/// assert!(VariableIndex::new(["x", "x"]).is_err());
/// ```
#[derive(Clone)]
pub struct VariableIndex<V> {
    variables: Vec<V>,
    positions: HashMap<V, usize>,
}

impl<V> VariableIndex<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Registers `variables` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::DuplicateVariable`] if a variable repeats.
    pub fn new(variables: impl IntoIterator<Item = V>) -> Result<Self, ScenarioError> {
        let variables: Vec<V> = variables.into_iter().collect();
        let mut positions = HashMap::with_capacity(variables.len());
        for (i, variable) in variables.iter().enumerate() {
            if positions.insert(variable.clone(), i).is_some() {
                return Err(ScenarioError::DuplicateVariable(format!("{variable:?}")));
            }
        }
        Ok(Self {
            variables,
            positions,
        })
    }

    /// Returns the dense index of `variable`.
    #[inline]
    pub fn index_of(&self, variable: &V) -> Option<usize> {
        self.positions.get(variable).copied()
    }

    /// Looks up `variable`, failing with [`ScenarioError::UnknownVariable`].
    pub fn require(&self, variable: &V) -> Result<usize, ScenarioError> {
        self.index_of(variable)
            .ok_or_else(|| ScenarioError::UnknownVariable(format!("{variable:?}")))
    }
}

impl<V> VariableIndex<V> {
    /// Returns the variable registered at `index`.
    #[inline]
    pub fn variable_at(&self, index: usize) -> Option<&V> {
        self.variables.get(index)
    }

    /// Returns all registered variables in index order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Returns the number of registered variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variable is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<V: Debug> Debug for VariableIndex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableIndex")
            .field("variables", &self.variables)
            .finish()
    }
}

/// A mutable assignment table bound to a shared [`VariableIndex`].
///
/// Scenarios handed out by [`ScenarioPool::take`] are not cleared: a
/// recycled instance still holds whatever its previous owner wrote. Callers
/// must overwrite every slot they read.
pub struct Scenario<V, A> {
    id: u64,
    index: Arc<VariableIndex<V>>,
    values: Box<[A]>,
}

impl<V, A> Scenario<V, A> {
    pub(crate) fn new(id: u64, index: Arc<VariableIndex<V>>) -> Self
    where
        A: Default + Clone,
    {
        let values = vec![A::default(); index.len()].into_boxed_slice();
        Self { id, index, values }
    }

    /// Identity of this instance within its pool.
    ///
    /// Stable across take/release cycles, so it tells recycled instances
    /// apart from freshly built ones.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the shared variable index.
    pub fn index(&self) -> &Arc<VariableIndex<V>> {
        &self.index
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the scenario has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at a dense index.
    #[inline]
    pub fn get_at(&self, index: usize) -> Option<&A> {
        self.values.get(index)
    }

    /// Overwrites the value at a dense index.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::IndexOutOfRange`] past the last slot.
    #[inline]
    pub fn set_at(&mut self, index: usize, value: A) -> Result<(), ScenarioError> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ScenarioError::IndexOutOfRange { index, len }),
        }
    }

    /// Returns all slots in index order.
    pub fn values(&self) -> &[A] {
        &self.values
    }

    /// Returns all slots mutably.
    pub fn values_mut(&mut self) -> &mut [A] {
        &mut self.values
    }

    /// Copies every slot from `other`.
    ///
    /// Both scenarios must come from the same index.
    pub fn copy_from(&mut self, other: &Self)
    where
        A: Clone,
    {
        debug_assert!(Arc::ptr_eq(&self.index, &other.index));
        self.values.clone_from_slice(&other.values);
    }

    /// Resets every slot to `A::default()`.
    pub fn reset(&mut self)
    where
        A: Default,
    {
        self.values.iter_mut().for_each(|slot| *slot = A::default());
    }
}

impl<V, A> Scenario<V, A>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Returns the value assigned to `variable`.
    pub fn get(&self, variable: &V) -> Result<&A, ScenarioError> {
        let i = self.index.require(variable)?;
        Ok(&self.values[i])
    }

    /// Assigns `value` to `variable`.
    pub fn set(&mut self, variable: &V, value: A) -> Result<(), ScenarioError> {
        let i = self.index.require(variable)?;
        self.values[i] = value;
        Ok(())
    }
}

impl<V, A> Index<usize> for Scenario<V, A> {
    type Output = A;

    #[inline]
    fn index(&self, index: usize) -> &A {
        &self.values[index]
    }
}

impl<V, A> IndexMut<usize> for Scenario<V, A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut A {
        &mut self.values[index]
    }
}

impl<V, A: Debug> Debug for Scenario<V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("id", &self.id)
            .field("values", &self.values)
            .finish()
    }
}

#[cfg(test)]
mod tests;
