//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use super::*;
use crate::scope::SearchScope;

fn scope_with(nodes: u64, solutions: u64) -> SearchScope {
    let mut scope = SearchScope::new();
    for _ in 0..nodes {
        scope.stats_mut().record_expansion();
    }
    for _ in 0..solutions {
        scope.stats_mut().record_solution();
    }
    scope
}

#[test]
fn test_no_termination() {
    assert!(!NoTermination.is_terminated(&scope_with(1_000, 1_000)));
}

#[test]
fn test_option_termination() {
    let scope = scope_with(5, 0);
    let none: Option<NodeCountTermination> = None;
    assert!(!none.is_terminated(&scope));
    assert!(Some(NodeCountTermination::new(5)).is_terminated(&scope));
}

#[test]
fn test_node_count_termination() {
    let term = NodeCountTermination::new(3);
    assert!(!term.is_terminated(&scope_with(2, 0)));
    assert!(term.is_terminated(&scope_with(3, 0)));
    assert!(term.is_terminated(&scope_with(4, 0)));
}

#[test]
fn test_solution_count_termination() {
    let term = SolutionCountTermination::new(2);
    assert!(!term.is_terminated(&scope_with(10, 1)));
    assert!(term.is_terminated(&scope_with(10, 2)));
}

#[test]
fn test_zero_time_limit_fires_immediately() {
    let term = TimeTermination::millis(0);
    assert!(term.is_terminated(&SearchScope::new()));
}

#[test]
fn test_time_limit_not_reached() {
    let term = TimeTermination::seconds(3_600);
    assert!(!term.is_terminated(&SearchScope::new()));
    assert_eq!(term.limit(), Duration::from_secs(3_600));
}

#[test]
fn test_deadline_termination() {
    let scope = SearchScope::new();
    assert!(DeadlineTermination::new(Instant::now()).is_terminated(&scope));
    assert!(!DeadlineTermination::after(Duration::from_secs(3_600)).is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let flag = AtomicBool::new(false);
    let term = ExternalTermination::new(&flag);
    let scope = SearchScope::new();

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_external_termination_from_other_thread() {
    let flag = AtomicBool::new(false);
    std::thread::scope(|s| {
        s.spawn(|| flag.store(true, Ordering::SeqCst));
    });
    assert!(ExternalTermination::new(&flag).is_terminated(&SearchScope::new()));
}

#[test]
fn test_fn_termination() {
    let term = FnTermination::new(|scope: &SearchScope| scope.nodes_explored() > 1);
    assert!(!term.is_terminated(&scope_with(1, 0)));
    assert!(term.is_terminated(&scope_with(2, 0)));
}

#[test]
fn test_or_termination() {
    let term = OrTermination((NodeCountTermination::new(10), SolutionCountTermination::new(1)));
    assert!(!term.is_terminated(&scope_with(5, 0)));
    assert!(term.is_terminated(&scope_with(5, 1)));
    assert!(term.is_terminated(&scope_with(10, 0)));
}

#[test]
fn test_and_termination() {
    let term = AndTermination((NodeCountTermination::new(10), SolutionCountTermination::new(1)));
    assert!(!term.is_terminated(&scope_with(5, 1)));
    assert!(!term.is_terminated(&scope_with(10, 0)));
    assert!(term.is_terminated(&scope_with(10, 1)));
}

#[test]
fn test_nested_composites_with_options() {
    let term = OrTermination((
        None::<TimeTermination>,
        AndTermination((Some(NodeCountTermination::new(2)), NoTermination)),
        Some(SolutionCountTermination::new(4)),
    ));
    assert!(!term.is_terminated(&scope_with(2, 3)));
    assert!(term.is_terminated(&scope_with(0, 4)));
}

#[test]
fn test_boxed_and_borrowed_terminations() {
    let boxed: Box<dyn Termination> = Box::new(NodeCountTermination::new(1));
    assert!(boxed.is_terminated(&scope_with(1, 0)));

    fn fires<T: Termination>(term: T, scope: &SearchScope) -> bool {
        term.is_terminated(scope)
    }
    let owned = NodeCountTermination::new(1);
    assert!(fires(&owned, &scope_with(1, 0)));
    assert!(!fires(&owned, &scope_with(0, 0)));
}
