//! N-Queens with board state held in pooled scenarios.
//!
//! A [`QueensNode`] places one queen per column, left to right. Its cost is
//! the number of attacking pairs among the queens placed so far, so a
//! zero-cost solution is a valid board. Row assignments live in a
//! [`Scenario`] checked out of the problem's [`ScenarioPool`]: cloning a node
//! takes a scenario from the pool and dropping one gives it back.
//!
//! # Example
//!
//! ```
//! use branchbound_core::Node;
//! use branchbound_test::nqueens::QueensProblem;
//!
//! let problem = QueensProblem::new(4).unwrap();
//! let root = problem.root();
//! assert_eq!(root.children().count(), 4);
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use branchbound_core::{Node, Scenario, ScenarioError, ScenarioPool, VariableIndex};

/// Board size and the pool shared by every node of one search.
pub struct QueensProblem {
    n: usize,
    pool: RefCell<ScenarioPool<usize, usize>>,
}

impl QueensProblem {
    /// Creates an `n`×`n` problem whose variables are the columns.
    pub fn new(n: usize) -> Result<Rc<Self>, ScenarioError> {
        let index = Arc::new(VariableIndex::new(0..n)?);
        Ok(Rc::new(Self {
            n,
            pool: RefCell::new(ScenarioPool::new(index)),
        }))
    }

    /// Returns the board size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the empty board.
    pub fn root(self: &Rc<Self>) -> QueensNode {
        let scenario = self.pool.borrow_mut().take();
        QueensNode {
            problem: Rc::clone(self),
            scenario: Some(scenario),
            placed: 0,
            conflicts: 0,
        }
    }

    /// Returns how many scenarios the pool has built.
    pub fn scenarios_created(&self) -> u64 {
        self.pool.borrow().created()
    }

    /// Returns how many scenarios are waiting in the pool.
    pub fn scenarios_available(&self) -> usize {
        self.pool.borrow().available()
    }
}

impl fmt::Debug for QueensProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueensProblem")
            .field("n", &self.n)
            .field("pool", &*self.pool.borrow())
            .finish()
    }
}

/// A partially filled board.
pub struct QueensNode {
    problem: Rc<QueensProblem>,
    scenario: Option<Scenario<usize, usize>>,
    placed: usize,
    conflicts: u32,
}

impl QueensNode {
    /// Returns the row of each placed queen, by column.
    pub fn rows(&self) -> &[usize] {
        match &self.scenario {
            Some(scenario) => &scenario.values()[..self.placed],
            None => &[],
        }
    }

    /// Returns the number of queens placed.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Returns the id of the backing scenario.
    pub fn scenario_id(&self) -> Option<u64> {
        self.scenario.as_ref().map(Scenario::id)
    }

    fn checkout(&self) -> Scenario<usize, usize> {
        let mut scenario = self.problem.pool.borrow_mut().take();
        if let Some(own) = &self.scenario {
            scenario.copy_from(own);
        }
        scenario
    }

    fn place(&self, row: usize) -> Self {
        let column = self.placed;
        let added = self
            .rows()
            .iter()
            .enumerate()
            .filter(|&(c, &r)| r == row || r.abs_diff(row) == column - c)
            .count() as u32;

        let mut scenario = self.checkout();
        scenario[column] = row;
        Self {
            problem: Rc::clone(&self.problem),
            scenario: Some(scenario),
            placed: column + 1,
            conflicts: self.conflicts + added,
        }
    }
}

impl Clone for QueensNode {
    fn clone(&self) -> Self {
        Self {
            problem: Rc::clone(&self.problem),
            scenario: Some(self.checkout()),
            placed: self.placed,
            conflicts: self.conflicts,
        }
    }
}

impl Drop for QueensNode {
    fn drop(&mut self) {
        if let Some(scenario) = self.scenario.take() {
            self.problem.pool.borrow_mut().release(scenario);
        }
    }
}

impl Node for QueensNode {
    type Cost = u32;

    fn cost(&self) -> u32 {
        self.conflicts
    }

    fn is_solution(&self) -> bool {
        self.placed == self.problem.n
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let rows = if self.is_solution() { 0 } else { self.problem.n };
        (0..rows).map(move |row| self.place(row))
    }

    /// Cost, then solutions first, then fuller boards first.
    fn compare(&self, other: &Self) -> Ordering {
        self.conflicts
            .cmp(&other.conflicts)
            .then_with(|| other.is_solution().cmp(&self.is_solution()))
            .then_with(|| other.placed.cmp(&self.placed))
    }
}

impl fmt::Debug for QueensNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueensNode")
            .field("rows", &self.rows())
            .field("conflicts", &self.conflicts)
            .finish()
    }
}

/// Returns true if no two queens in `rows` attack each other.
pub fn is_valid_board(rows: &[usize]) -> bool {
    rows.iter().enumerate().all(|(c1, &r1)| {
        rows[c1 + 1..]
            .iter()
            .enumerate()
            .all(|(offset, &r2)| r1 != r2 && r1.abs_diff(r2) != offset + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicts_count_rows_and_diagonals() {
        let problem = QueensProblem::new(4).unwrap();
        let root = problem.root();
        let a = root.place(0);
        assert_eq!(a.place(0).cost(), 1);
        assert_eq!(a.place(1).cost(), 1);
        assert_eq!(a.place(2).cost(), 0);
        assert_eq!(a.place(2).rows(), &[0, 2]);
    }

    #[test]
    fn test_dropped_nodes_return_scenarios() {
        let problem = QueensProblem::new(5).unwrap();
        let root = problem.root();
        let children: Vec<_> = root.children().collect();
        assert_eq!(problem.scenarios_created(), 6);
        assert_eq!(problem.scenarios_available(), 0);

        drop(children);
        assert_eq!(problem.scenarios_available(), 5);

        let again: Vec<_> = root.children().collect();
        assert_eq!(problem.scenarios_created(), 6);
        assert_eq!(again.len(), 5);
    }

    #[test]
    fn test_clone_copies_rows_into_fresh_scenario() {
        let problem = QueensProblem::new(4).unwrap();
        let node = problem.root().place(1).place(3);
        let copy = node.clone();
        assert_eq!(copy.rows(), &[1, 3]);
        assert_ne!(copy.scenario_id(), node.scenario_id());
    }

    #[test]
    fn test_is_valid_board() {
        assert!(is_valid_board(&[1, 3, 0, 2]));
        assert!(!is_valid_board(&[0, 1, 2, 3]));
        assert!(!is_valid_board(&[0, 2, 0, 3]));
        assert!(is_valid_board(&[]));
    }
}
