/// Transaction tests
///
/// Nested START/COMMIT/ABORT behaviour of the transaction manager
/// Run with: cargo test --test transaction_tests
use nestkv::{KvError, Operation, TransactionManager, TxnAction};

fn logged(manager: &TransactionManager, index: usize) -> Vec<(Operation, Vec<String>)> {
    manager.list()[index]
        .commands()
        .iter()
        .map(|c| (c.operation(), c.args().to_vec()))
        .collect()
}

#[test]
fn test_unwritten_keys_are_not_found() {
    let mut manager = TransactionManager::new();
    for key in ["a", "b", "some-key"] {
        assert_eq!(manager.read(&[key]), Err(KvError::KeyNotFound(key.to_string())));
    }
}

#[test]
fn test_write_then_read_inside_and_outside_transaction() {
    let mut manager = TransactionManager::new();
    manager.write(&["k", "outside"]).unwrap();
    assert_eq!(manager.read(&["k"]).unwrap(), "outside");

    manager.start();
    manager.write(&["k", "inside"]).unwrap();
    assert_eq!(manager.read(&["k"]).unwrap(), "inside");
}

#[test]
fn test_delete_is_idempotent() {
    let mut manager = TransactionManager::new();
    manager.write(&["k", "v"]).unwrap();
    manager.delete(&["k"]).unwrap();
    manager.delete(&["k"]).unwrap();
    assert!(matches!(manager.read(&["k"]), Err(KvError::KeyNotFound(_))));
}

#[test]
fn test_depth_tracks_start_commit_abort() {
    let mut manager = TransactionManager::new();
    assert_eq!(manager.depth(), 0);

    manager.start();
    manager.start();
    manager.start();
    assert_eq!(manager.depth(), 3);

    manager.commit().unwrap();
    assert_eq!(manager.depth(), 2);
    manager.abort().unwrap();
    assert_eq!(manager.depth(), 1);
    manager.commit().unwrap();
    assert_eq!(manager.depth(), 0);

    assert_eq!(
        manager.commit(),
        Err(KvError::NoActiveTransaction(TxnAction::Commit))
    );
    assert_eq!(
        manager.abort(),
        Err(KvError::NoActiveTransaction(TxnAction::Abort))
    );
    assert_eq!(manager.depth(), 0);
}

#[test]
fn test_nested_commit_produces_single_entry() {
    let mut manager = TransactionManager::new();
    manager.start();
    manager.write(&["a", "1"]).unwrap();
    manager.start();
    manager.write(&["b", "2"]).unwrap();
    manager.commit().unwrap();
    manager.commit().unwrap();

    assert_eq!(manager.list().len(), 1);
    assert_eq!(
        logged(&manager, 0),
        vec![
            (Operation::Write, vec!["a".to_string(), "1".to_string()]),
            (Operation::Write, vec!["b".to_string(), "2".to_string()]),
        ]
    );
}

#[test]
fn test_abort_does_not_roll_back_store() {
    let mut manager = TransactionManager::new();
    manager.start();
    manager.write(&["a", "1"]).unwrap();
    manager.abort().unwrap();

    assert_eq!(manager.read(&["a"]).unwrap(), "1");
    assert!(manager.list().is_empty());
}

#[test]
fn test_inner_abort_then_outer_commit() {
    let mut manager = TransactionManager::new();
    manager.start();
    manager.write(&["a", "1"]).unwrap();
    manager.start();
    manager.write(&["b", "2"]).unwrap();
    manager.abort().unwrap();
    manager.commit().unwrap();

    assert_eq!(manager.list().len(), 1);
    assert_eq!(
        logged(&manager, 0),
        vec![(Operation::Write, vec!["a".to_string(), "1".to_string()])]
    );
}

#[test]
fn test_merged_log_lost_when_ancestor_aborts() {
    let mut manager = TransactionManager::new();
    manager.start();
    manager.start();
    manager.write(&["b", "2"]).unwrap();
    manager.commit().unwrap();
    manager.abort().unwrap();

    assert!(manager.list().is_empty());
    assert_eq!(manager.read(&["b"]).unwrap(), "2");
}

#[test]
fn test_commits_are_listed_in_order() {
    let mut manager = TransactionManager::new();
    let first = manager.start();
    manager.write(&["x", "1"]).unwrap();
    manager.commit().unwrap();

    let second = manager.start();
    manager.read(&["x"]).unwrap();
    manager.commit().unwrap();

    let ids: Vec<_> = manager.list().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(
        logged(&manager, 1),
        vec![(Operation::Read, vec!["x".to_string()])]
    );
}
