//! branchbound Solver Engine
//!
//! This crate provides the search implementation:
//! - [`BestFirstSearch`] and the one-shot [`SearchBuilder`]
//! - [`MinMaxHeap`], the double-ended queue behind the search frontier
//! - Termination conditions
//! - Run statistics and the [`SearchResult`] record

pub mod queue;
pub mod result;
pub mod scope;
pub mod search;
pub mod stats;
pub mod termination;

pub use queue::MinMaxHeap;
pub use result::{SearchResult, TerminationReason};
pub use scope::SearchScope;
pub use search::{BestFirstSearch, ConfiguredTermination, SearchBuilder};
pub use stats::SearchStats;
pub use termination::{
    AndTermination, DeadlineTermination, ExternalTermination, FnTermination, NoTermination,
    NodeCountTermination, OrTermination, SolutionCountTermination, Termination, TimeTermination,
};
