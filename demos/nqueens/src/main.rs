//! N-Queens Demo
//!
//! Places N queens on an N×N board, one column at a time, so that no two
//! queens attack each other. Cost is the number of attacking pairs, so the
//! optimum of a solvable board is zero.
//!
//! A random complete board seeds the search to show how a known solution
//! bounds pruning from the first expansion.
//!
//! ```text
//! cargo run -p nqueens -- 10
//! ```

use std::env;
use std::process::ExitCode;

use branchbound::prelude::*;
use rand::Rng;

/// A board with queens placed in the leftmost `rows.len()` columns.
#[derive(Clone, Debug)]
struct Board {
    n: usize,
    rows: Vec<usize>,
    conflicts: u32,
}

impl Board {
    fn empty(n: usize) -> Self {
        Self {
            n,
            rows: Vec::with_capacity(n),
            conflicts: 0,
        }
    }

    fn random(n: usize, rng: &mut impl Rng) -> Self {
        (0..n).fold(Self::empty(n), |board, _| board.place(rng.random_range(0..n)))
    }

    fn place(&self, row: usize) -> Self {
        let column = self.rows.len();
        let added = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(c, &r)| r == row || r.abs_diff(row) == column - c)
            .count() as u32;

        let mut rows = Vec::with_capacity(self.n);
        rows.extend_from_slice(&self.rows);
        rows.push(row);
        Self {
            n: self.n,
            rows,
            conflicts: self.conflicts + added,
        }
    }

    fn print(&self) {
        let rule = "-".repeat(self.n * 2 + 1);
        println!("\n{}-Queens ({} conflicts):", self.n, self.conflicts);
        println!("{rule}");
        for row in 0..self.n {
            print!("|");
            for column in 0..self.n {
                let here = self.rows.get(column) == Some(&row);
                print!("{}", if here { "Q|" } else { " |" });
            }
            println!();
        }
        println!("{rule}");
    }
}

impl Node for Board {
    type Cost = u32;

    fn cost(&self) -> u32 {
        self.conflicts
    }

    fn is_solution(&self) -> bool {
        self.rows.len() == self.n
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let rows = if self.is_solution() { 0 } else { self.n };
        (0..rows).map(move |row| self.place(row))
    }

    fn compare(&self, other: &Self) -> std::cmp::Ordering {
        self.conflicts
            .cmp(&other.conflicts)
            .then_with(|| other.is_solution().cmp(&self.is_solution()))
            .then_with(|| other.rows.len().cmp(&self.rows.len()))
    }
}

fn main() -> ExitCode {
    branchbound::console::init();

    let n = match env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => 8,
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            eprintln!("usage: nqueens [N]  (N must be a positive integer)");
            return ExitCode::FAILURE;
        }
    };

    let seed = Board::random(n, &mut rand::rng());
    println!("Seed board has {} conflicts", seed.conflicts);

    match branchbound::run_search(Board::empty(n), Some(seed)) {
        Ok(result) => {
            if let Some(board) = result.best() {
                board.print();
            }
            println!("Finished: {}", result.reason);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("invalid search.toml: {err}");
            ExitCode::FAILURE
        }
    }
}
