//! Transaction contracts
//!
//! Each user action reads inside one transaction that is always closed
//! afterwards; a failed commit fails the action.

use crate::common::*;
use dbinspect::{InspectError, Inspector, NodePath, Session, Value};

#[test]
fn contract_no_transaction_outlives_an_action() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut session = Session::open(&store, &inspector, Value::Id(id(NOD))).unwrap();
    assert_eq!(store.open_transactions(), 0);

    session
        .on_selection_changed(&NodePath::from_indices(vec![0, 0]))
        .unwrap();
    assert_eq!(store.open_transactions(), 0);

    session.expand(&NodePath::from_indices(vec![0, 0])).unwrap();
    assert_eq!(store.open_transactions(), 0);
}

#[test]
fn contract_failed_commit_is_a_hard_error() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut session = Session::open(&store, &inspector, Value::Id(id(NOD))).unwrap();
    let before = session.properties().to_vec();

    store.fail_next_commit("write lock held");
    let err = session
        .on_selection_changed(&NodePath::from_indices(vec![0, 0]))
        .unwrap_err();

    assert!(matches!(err, InspectError::Gateway(_)));
    assert_eq!(store.open_transactions(), 0);
    assert_eq!(session.selected(), Some(&NodePath::root(0)));
    assert_eq!(entry_names(session.properties()), entry_names(&before));
}
