//! Disposal contracts
//!
//! Every scratch record a session reads is disposed exactly once, when
//! that session closes, and never by another session.

use crate::common::*;
use dbinspect::{Inspector, NodePath, Session, Value};

#[test]
fn contract_each_scratch_record_is_disposed_once() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut session = Session::open(&store, &inspector, Value::Id(id(SOLID))).unwrap();
    for _ in 0..3 {
        session.on_selection_changed(&NodePath::root(0)).unwrap();
    }
    assert_eq!(session.pending_disposals(), 4);

    assert_eq!(session.on_close(), 4);
    assert_eq!(session.on_close(), 0);
    drop(session);

    assert_eq!(store.disposal_log().disposed(), 4);
    assert_eq!(store.disposal_log().redundant(), 0);
}

#[test]
fn contract_nested_session_never_disposes_parent_records() {
    let store = drawing();
    let inspector = Inspector::default();
    let solid = Session::open(&store, &inspector, Value::Id(id(SOLID))).unwrap();
    let brep = entry(solid.properties(), "Boundary representation").clone();

    let nested = solid.on_property_activated(&brep).unwrap();
    drop(nested);
    assert_eq!(store.disposal_log().disposed(), 0);

    // The parent can still read its record after the nested window closed
    let again = solid.on_property_activated(&brep).unwrap();
    assert!(!again.forest()[0].children().is_empty());
    drop(again);

    drop(solid);
    assert_eq!(store.disposal_log().disposed(), 1);
    assert_eq!(store.disposal_log().redundant(), 0);
}

#[test]
fn contract_persistent_records_are_never_tracked() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut session = Session::open(&store, &inspector, Value::Id(id(NOD))).unwrap();
    session
        .on_selection_changed(&NodePath::from_indices(vec![0, 0]))
        .unwrap();

    assert_eq!(session.pending_disposals(), 0);
    assert_eq!(session.on_close(), 0);
}

#[test]
fn contract_nested_session_closes_before_its_parent() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut solid = Session::open(&store, &inspector, Value::Id(id(SOLID))).unwrap();
    let brep = entry(solid.properties(), "Boundary representation").clone();

    {
        let mut topology = solid.on_property_activated(&brep).unwrap();
        let properties = topology.on_selection_changed(&NodePath::root(0)).unwrap();
        assert_eq!(entry_names(properties), vec!["IsValid", "Complexes"]);
        assert!(properties.iter().all(|e| e.label != "object has been disposed"));
        assert_eq!(topology.on_close(), 0);
    }

    assert_eq!(store.disposal_log().disposed(), 0);
    assert_eq!(solid.pending_disposals(), 1);
    assert_eq!(solid.on_close(), 1);
    assert_eq!(store.disposal_log().disposed(), 1);
}
