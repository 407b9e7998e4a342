//! Double-ended priority queue.
//!
//! A min-max heap: a binary heap whose even levels are ordered as a min-heap
//! and whose odd levels are ordered as a max-heap. The root is the minimum
//! and the larger of its two children is the maximum.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

/// Double-ended priority queue with O(1) access to both ends.
///
/// | Operation             | Cost     |
/// |-----------------------|----------|
/// | `push`                | O(log n) |
/// | `peek_min`/`peek_max` | O(1)     |
/// | `pop_min`/`pop_max`   | O(log n) |
/// | `len`                 | O(1)     |
///
/// # Example
///
/// ```
/// use branchbound_solver::queue::MinMaxHeap;
///
/// let mut heap: MinMaxHeap<i32> = [5, 1, 9, 3].into_iter().collect();
/// assert_eq!(heap.peek_min(), Some(&1));
/// assert_eq!(heap.peek_max(), Some(&9));
///
/// assert_eq!(heap.pop_max(), Some(9));
/// assert_eq!(heap.pop_min(), Some(1));
/// assert_eq!(heap.into_sorted_vec(), vec![3, 5]);
/// ```
#[derive(Clone)]
pub struct MinMaxHeap<T> {
    data: Vec<T>,
}

#[inline]
fn is_min_level(index: usize) -> bool {
    (index + 1).ilog2() % 2 == 0
}

impl<T> MinMaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the allocated capacity.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the items in arbitrary order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its items in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Inserts an item.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.bubble_up(self.data.len() - 1);
    }

    /// Returns the smallest item.
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the largest item.
    #[inline]
    pub fn peek_max(&self) -> Option<&T> {
        self.max_index().map(|i| &self.data[i])
    }

    /// Removes and returns the smallest item.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let item = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.trickle_down(0);
        }
        Some(item)
    }

    /// Removes and returns the largest item.
    pub fn pop_max(&mut self) -> Option<T> {
        let index = self.max_index()?;
        let item = self.data.swap_remove(index);
        if index < self.data.len() {
            self.trickle_down(index);
        }
        Some(item)
    }

    /// Pops the smallest item only if it satisfies `predicate`.
    pub fn pop_min_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if self.peek_min().is_some_and(predicate) {
            self.pop_min()
        } else {
            None
        }
    }

    /// Pops the largest item only if it satisfies `predicate`.
    pub fn pop_max_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if self.peek_max().is_some_and(predicate) {
            self.pop_max()
        } else {
            None
        }
    }

    /// Consumes the heap, returning its items in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop_min() {
            sorted.push(item);
        }
        sorted
    }

    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.data[1] >= self.data[2] => Some(1),
            _ => Some(2),
        }
    }

    fn bubble_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let parent = (index - 1) / 2;
        if is_min_level(index) {
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                self.bubble_up_by(parent, Ordering::Greater);
            } else {
                self.bubble_up_by(index, Ordering::Less);
            }
        } else if self.data[index] < self.data[parent] {
            self.data.swap(index, parent);
            self.bubble_up_by(parent, Ordering::Less);
        } else {
            self.bubble_up_by(index, Ordering::Greater);
        }
    }

    /// Climbs grandparent links while the item compares `toward` them.
    fn bubble_up_by(&mut self, mut index: usize, toward: Ordering) {
        while index > 2 {
            let grandparent = ((index - 1) / 2 - 1) / 2;
            if self.data[index].cmp(&self.data[grandparent]) != toward {
                break;
            }
            self.data.swap(index, grandparent);
            index = grandparent;
        }
    }

    fn trickle_down(&mut self, index: usize) {
        if is_min_level(index) {
            self.trickle_down_by(index, Ordering::Less);
        } else {
            self.trickle_down_by(index, Ordering::Greater);
        }
    }

    /// Sinks the item at `index` through its level's descendants.
    ///
    /// `toward` is `Less` on min levels and `Greater` on max levels.
    fn trickle_down_by(&mut self, mut index: usize, toward: Ordering) {
        while let Some(m) = self.extreme_descendant(index, toward) {
            if self.data[m].cmp(&self.data[index]) != toward {
                return;
            }
            self.data.swap(m, index);
            if m <= 2 * index + 2 {
                // direct child: it sits on the opposite level, nothing below moves
                return;
            }
            let parent = (m - 1) / 2;
            if self.data[m].cmp(&self.data[parent]) == toward.reverse() {
                self.data.swap(m, parent);
            }
            index = m;
        }
    }

    /// Index of the most extreme item among the children and grandchildren.
    fn extreme_descendant(&self, index: usize, toward: Ordering) -> Option<usize> {
        let len = self.data.len();
        let first_child = 2 * index + 1;
        if first_child >= len {
            return None;
        }
        let first_grandchild = 4 * index + 3;
        let children = first_child..(first_child + 2).min(len);
        let grandchildren = first_grandchild.min(len)..(first_grandchild + 4).min(len);
        children.chain(grandchildren).reduce(|best, i| {
            if self.data[i].cmp(&self.data[best]) == toward {
                i
            } else {
                best
            }
        })
    }
}

impl<T> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Debug> Debug for MinMaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinMaxHeap")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn assert_heap_property<T: Ord + Debug>(heap: &MinMaxHeap<T>) {
        let data = &heap.data;
        for i in 0..data.len() {
            let descendants = (2 * i + 1..2 * i + 3).chain(4 * i + 3..4 * i + 7);
            for d in descendants.filter(|&d| d < data.len()) {
                if is_min_level(i) {
                    assert!(data[i] <= data[d], "min level {i} > descendant {d}");
                } else {
                    assert!(data[i] >= data[d], "max level {i} < descendant {d}");
                }
            }
        }
    }

    #[test]
    fn test_level_parity() {
        assert!(is_min_level(0));
        assert!(!is_min_level(1));
        assert!(!is_min_level(2));
        assert!((3..7).all(is_min_level));
        assert!((7..15).all(|i| !is_min_level(i)));
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: MinMaxHeap<u8> = MinMaxHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.peek_min(), None);
        assert_eq!(heap.peek_max(), None);
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn test_single_item_is_both_ends() {
        let mut heap = MinMaxHeap::new();
        heap.push(7);
        assert_eq!(heap.peek_min(), Some(&7));
        assert_eq!(heap.peek_max(), Some(&7));
        assert_eq!(heap.pop_max(), Some(7));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_two_items() {
        let mut heap: MinMaxHeap<i32> = [4, 2].into_iter().collect();
        assert_eq!(heap.peek_min(), Some(&2));
        assert_eq!(heap.peek_max(), Some(&4));
        assert_eq!(heap.pop_min(), Some(2));
        assert_eq!(heap.pop_min(), Some(4));
    }

    #[test]
    fn test_duplicates() {
        let mut heap: MinMaxHeap<i32> = [3, 3, 1, 3, 1].into_iter().collect();
        assert_heap_property(&heap);
        assert_eq!(heap.pop_max(), Some(3));
        assert_eq!(heap.pop_min(), Some(1));
        assert_eq!(heap.into_sorted_vec(), vec![1, 3, 3]);
    }

    #[test]
    fn test_conditional_pops() {
        let mut heap: MinMaxHeap<i32> = (1..=5).collect();
        assert_eq!(heap.pop_min_if(|&x| x > 1), None);
        assert_eq!(heap.pop_min_if(|&x| x == 1), Some(1));
        assert_eq!(heap.pop_max_if(|&x| x < 5), None);
        assert_eq!(heap.pop_max_if(|&x| x == 5), Some(5));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap: MinMaxHeap<i32> = [9, -2, 14, 0, 7, 7, 3, 12, -8, 5].into_iter().collect();
        assert_eq!(
            heap.into_sorted_vec(),
            vec![-8, -2, 0, 3, 5, 7, 7, 9, 12, 14]
        );
    }

    #[test]
    fn test_matches_sorted_reference_under_random_operations() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let mut heap = MinMaxHeap::new();
        let mut reference: Vec<u32> = Vec::new();

        for _ in 0..5_000 {
            match rng.random_range(0..4) {
                0 | 1 => {
                    let value = rng.random_range(0..200);
                    heap.push(value);
                    let at = reference.partition_point(|&x| x < value);
                    reference.insert(at, value);
                }
                2 => {
                    let expected = if reference.is_empty() {
                        None
                    } else {
                        Some(reference.remove(0))
                    };
                    assert_eq!(heap.pop_min(), expected);
                }
                _ => assert_eq!(heap.pop_max(), reference.pop()),
            }
            assert_eq!(heap.len(), reference.len());
            assert_eq!(heap.peek_min(), reference.first());
            assert_eq!(heap.peek_max(), reference.last());
        }
        assert_heap_property(&heap);
    }

    #[test]
    fn test_heap_property_after_max_removals() {
        let mut heap: MinMaxHeap<u32> = (0..100).map(|i| (i * 37) % 101).collect();
        for _ in 0..40 {
            heap.pop_max();
            assert_heap_property(&heap);
        }
        assert_eq!(heap.len(), 60);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut heap: MinMaxHeap<u32> = MinMaxHeap::with_capacity(16);
        heap.extend(0..10);
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.capacity() >= 16);
    }
}
