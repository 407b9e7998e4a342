//! branchbound Core - node contract and pooled assignment storage
//!
//! This crate provides the fundamental abstractions for branchbound:
//! - The [`Node`] trait every searchable problem model implements
//! - Error types shared by the workspace
//! - [`Scenario`] / [`ScenarioPool`] for allocation-free partial assignments

pub mod error;
pub mod node;
pub mod scenario;

pub use error::{BranchBoundError, Result, ScenarioError};
pub use node::Node;
pub use scenario::{PooledScenario, Scenario, ScenarioPool, VariableIndex};
