//! branchbound - best-first branch-and-bound search in Rust
//!
//! Implement [`Node`] for a problem model and call [`run_search`], or build a
//! [`BestFirstSearch`] directly for full control over termination.
//!
//! # Example
//!
//! ```rust
//! use branchbound::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct Countdown(u32);
//!
//! impl Node for Countdown {
//!     type Cost = u32;
//!     fn cost(&self) -> u32 { 10 - self.0 }
//!     fn is_solution(&self) -> bool { self.0 == 0 }
//!     fn children(&self) -> impl Iterator<Item = Self> {
//!         (0..self.0).map(Countdown)
//!     }
//! }
//!
//! let result = BestFirstSearch::new().solve(Countdown(10), None);
//! assert_eq!(result.best_cost(), Some(10));
//! ```

pub use branchbound_config::{ConfigError, SearchConfig, TerminationConfig};
pub use branchbound_core::{
    BranchBoundError, Node, PooledScenario, Result, Scenario, ScenarioError, ScenarioPool,
    VariableIndex,
};
pub use branchbound_solver::termination;
pub use branchbound_solver::{
    BestFirstSearch, ConfiguredTermination, MinMaxHeap, SearchBuilder, SearchResult, SearchScope,
    SearchStats, TerminationReason,
};

#[cfg(feature = "console")]
pub mod console;

mod search;
pub use search::{run_search, run_search_with_config, DEFAULT_CONFIG_PATH};

pub mod prelude {
    pub use super::termination::{
        ExternalTermination, NodeCountTermination, SolutionCountTermination, Termination,
        TimeTermination,
    };
    pub use super::{
        run_search, BestFirstSearch, Node, Scenario, ScenarioPool, SearchBuilder, SearchConfig,
        SearchResult, TerminationReason, VariableIndex,
    };
}
