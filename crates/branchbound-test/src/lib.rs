//! Shared test fixtures for branchbound crates.
//!
//! Every fixture implements [`Node`](branchbound_core::Node) with a cost that
//! never decreases from parent to child, so each one is safe to search with
//! pruning enabled.
//!
//! - [`binary`] - fixed-length binary strings scored against a target
//! - [`tree`] - reproducible random trees
//! - [`fanout`] - a wide, shallow tree for cancellation tests
//! - [`nqueens`] - N-Queens backed by a shared [`ScenarioPool`](branchbound_core::ScenarioPool)
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! branchbound-test = { workspace = true }
//! ```

pub mod binary;
pub mod fanout;
pub mod nqueens;
pub mod tree;

pub use binary::BinaryStringNode;
pub use fanout::FanOutNode;
pub use nqueens::{QueensNode, QueensProblem};
pub use tree::{RandomTreeNode, TreeShape};
