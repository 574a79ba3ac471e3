//! Self-guard contracts
//!
//! A value that designates the record being inspected is shown, but it
//! never opens a way back into the same record.

use crate::common::*;
use dbinspect::{Inspector, MemoryStore, NodePath, Session, Value};

#[test]
fn contract_self_valued_member_is_terminal() {
    let store = drawing();
    let inspector = Inspector::default();
    let session = Session::open(&store, &inspector, Value::Id(id(LINE))).unwrap();

    let owner = entry(session.properties(), "Owner");
    assert!(!owner.navigable);
    assert!(session.on_property_activated(owner).is_err());
}

#[test]
fn contract_self_listing_registry_child_is_terminal() {
    let mut store = MemoryStore::new();
    let registry = store
        .record("DBDictionary")
        .entry("self", id(1))
        .entry("other", id(2));
    store.insert_at(1, registry);
    store.insert_at(2, store.record("Xrecord"));
    let inspector = Inspector::default();
    let mut session = Session::open(&store, &inspector, Value::Id(id(1))).unwrap();

    let own = NodePath::from_indices(vec![0, 0]);
    let node = session.node(&own).unwrap();
    assert_eq!(node.name, "self");
    assert!(!node.navigable);
    assert!(node.children().is_empty());

    let expanded = session.expand(&own).unwrap();
    assert!(expanded.children().is_empty());
    assert!(session.node(&NodePath::from_indices(vec![0, 1])).unwrap().navigable);
}
