//! Tests for scenarios and the scenario pool.

use super::*;

fn index() -> Arc<VariableIndex<String>> {
    let variables = ["q0", "q1", "q2", "q3"].map(String::from);
    Arc::new(VariableIndex::new(variables).unwrap())
}

#[test]
fn test_index_is_dense_and_ordered() {
    let index = index();
    assert_eq!(index.len(), 4);
    for (i, variable) in index.variables().iter().enumerate() {
        assert_eq!(index.index_of(variable), Some(i));
        assert_eq!(index.variable_at(i), Some(variable));
    }
    assert_eq!(index.index_of(&"q9".to_string()), None);
    assert_eq!(index.variable_at(4), None);
}

#[test]
fn test_index_rejects_duplicates() {
    let err = VariableIndex::new(["a", "b", "a"]).unwrap_err();
    assert_eq!(err, ScenarioError::DuplicateVariable("\"a\"".to_string()));
}

#[test]
fn test_empty_index() {
    let index: VariableIndex<u32> = VariableIndex::new([]).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_get_and_set_by_variable() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());
    let mut scenario = pool.take();

    scenario.set(&"q2".to_string(), 5).unwrap();
    assert_eq!(scenario.get(&"q2".to_string()), Ok(&5));
    assert_eq!(scenario[2], 5);

    let err = scenario.set(&"q7".to_string(), 1).unwrap_err();
    assert_eq!(err, ScenarioError::UnknownVariable("\"q7\"".to_string()));
}

#[test]
fn test_set_at_out_of_range() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());
    let mut scenario = pool.take();

    assert!(scenario.set_at(3, 1).is_ok());
    assert_eq!(
        scenario.set_at(4, 1),
        Err(ScenarioError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(scenario.get_at(4), None);
}

#[test]
fn test_fresh_scenario_is_default_filled() {
    let mut pool: ScenarioPool<String, Option<u8>> = ScenarioPool::new(index());
    let scenario = pool.take();
    assert!(scenario.values().iter().all(Option::is_none));
    assert_eq!(pool.created(), 1);
}

#[test]
fn test_take_after_release_recycles_same_instance() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());

    let scenario = pool.take();
    let id = scenario.id();
    let ptr = scenario.values().as_ptr();
    pool.release(scenario);
    assert_eq!(pool.available(), 1);

    let again = pool.take();
    assert_eq!(again.id(), id);
    assert_eq!(again.values().as_ptr(), ptr);
    assert_eq!(pool.created(), 1);
    assert_eq!(pool.available(), 0);
}

#[test]
fn test_recycled_contents_are_not_reset() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());

    let mut scenario = pool.take();
    scenario.values_mut().copy_from_slice(&[1, 2, 3, 4]);
    pool.release(scenario);

    let mut scenario = pool.take();
    assert_eq!(scenario.values(), &[1, 2, 3, 4]);

    scenario.reset();
    assert_eq!(scenario.values(), &[0, 0, 0, 0]);
}

#[test]
fn test_free_list_is_lifo() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());
    let a = pool.take();
    let b = pool.take();
    let (a_id, b_id) = (a.id(), b.id());
    assert_ne!(a_id, b_id);

    pool.release(a);
    pool.release(b);
    assert_eq!(pool.take().id(), b_id);
    assert_eq!(pool.take().id(), a_id);
    assert_eq!(pool.created(), 2);
}

#[test]
fn test_prefill() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::with_capacity(index(), 8);
    pool.prefill(3);
    assert_eq!(pool.available(), 3);
    assert_eq!(pool.created(), 3);

    pool.prefill(2);
    assert_eq!(pool.available(), 3);
}

#[test]
fn test_copy_from() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());
    let mut source = pool.take();
    source.values_mut().copy_from_slice(&[9, 8, 7, 6]);

    let mut target = pool.take();
    target.copy_from(&source);
    assert_eq!(target.values(), source.values());
}

#[test]
fn test_scoped_scenario_releases_on_drop() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());
    let id = {
        let mut scoped = pool.take_scoped();
        scoped[0] = 42;
        scoped.id()
    };
    assert_eq!(pool.available(), 1);

    let scenario = pool.take();
    assert_eq!(scenario.id(), id);
    assert_eq!(scenario[0], 42);
}

#[test]
fn test_scoped_scenario_into_inner_detaches() {
    let mut pool: ScenarioPool<String, u8> = ScenarioPool::new(index());
    let scenario = pool.take_scoped().into_inner();
    assert_eq!(pool.available(), 0);
    pool.release(scenario);
    assert_eq!(pool.available(), 1);
}

#[test]
fn test_pools_share_one_index() {
    let shared = index();
    let mut first: ScenarioPool<String, u8> = ScenarioPool::new(Arc::clone(&shared));
    let mut second: ScenarioPool<String, u8> = ScenarioPool::new(Arc::clone(&shared));

    assert!(Arc::ptr_eq(first.take().index(), second.take().index()));
    assert_eq!(Arc::strong_count(&shared), 3);
}
