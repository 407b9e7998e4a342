//! Error types for branchbound

use thiserror::Error;

/// Main error type for branchbound operations
#[derive(Debug, Error)]
pub enum BranchBoundError {
    /// A required argument was missing or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error building or addressing a scenario
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised by [`VariableIndex`](crate::VariableIndex) and
/// [`Scenario`](crate::Scenario) lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("variable {0} is registered more than once")]
    DuplicateVariable(String),

    #[error("variable {0} is not registered")]
    UnknownVariable(String),

    #[error("index {index} out of range for {len} variables")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for branchbound operations
pub type Result<T> = std::result::Result<T, BranchBoundError>;
