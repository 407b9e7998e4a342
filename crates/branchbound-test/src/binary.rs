//! Binary strings grown one bit at a time toward a fixed-length target.
//!
//! Cost is the edit distance between the string and the target prefix of
//! the same length. Appending a bit never lowers that distance, and a
//! complete string's cost is its edit distance to the whole target.

use std::sync::Arc;

use branchbound_core::Node;

/// A partial binary string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryStringNode {
    value: String,
    target: Arc<str>,
}

impl BinaryStringNode {
    /// Creates the empty string for `target`.
    pub fn root(target: &str) -> Self {
        Self::with_value(target, "")
    }

    /// Creates a node holding `value`, e.g. to seed a search.
    pub fn with_value(target: &str, value: &str) -> Self {
        Self {
            value: value.to_string(),
            target: Arc::from(target),
        }
    }

    /// Returns the bits chosen so far.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the target string.
    pub fn target(&self) -> &str {
        &self.target
    }

    fn child(&self, bit: char) -> Self {
        let mut value = String::with_capacity(self.value.len() + 1);
        value.push_str(&self.value);
        value.push(bit);
        Self {
            value,
            target: Arc::clone(&self.target),
        }
    }
}

impl Node for BinaryStringNode {
    type Cost = u32;

    fn cost(&self) -> u32 {
        let prefix_len = self.value.len().min(self.target.len());
        edit_distance(&self.value, &self.target[..prefix_len])
    }

    fn is_solution(&self) -> bool {
        self.value.len() == self.target.len()
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let open = self.value.len() < self.target.len();
        ['0', '1']
            .into_iter()
            .filter(move |_| open)
            .map(move |bit| self.child(bit))
    }
}

/// Levenshtein distance between two ASCII strings.
pub fn edit_distance(a: &str, b: &str) -> u32 {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut prev: Vec<u32> = (0..=b.len() as u32).collect();
    let mut row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        row[0] = i as u32 + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + u32::from(ca != cb);
            row[j + 1] = substitute.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("101", "101"), 0);
        assert_eq!(edit_distance("100", "101"), 1);
        assert_eq!(edit_distance("010", "101"), 2);
        assert_eq!(edit_distance("", "101"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_cost_never_decreases_along_a_path() {
        let root = BinaryStringNode::root("1011");
        let mut frontier = vec![root];
        while let Some(node) = frontier.pop() {
            for child in node.children() {
                assert!(child.cost() >= node.cost(), "{child:?} < {node:?}");
                frontier.push(child);
            }
        }
    }

    #[test]
    fn test_complete_strings_have_no_children() {
        let node = BinaryStringNode::with_value("101", "110");
        assert!(node.is_solution());
        assert_eq!(node.children().count(), 0);
        assert_eq!(node.cost(), 2);
    }
}
