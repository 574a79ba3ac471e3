//! Ordering contracts
//!
//! Members run from the base type to the most derived one, each group in
//! declaration order; synthetic entries follow the members and the
//! reference entries come last. Tree children keep the store's order.

use crate::common::*;
use dbinspect::domain::ports::Facet;
use dbinspect::{Inspector, MemoryStore, Session, Value};

#[test]
fn contract_groups_run_base_to_derived() {
    let store = drawing();
    let inspector = Inspector::default();
    let session = Session::open(&store, &inspector, Value::Id(id(LINE))).unwrap();

    let mut groups: Vec<&str> = Vec::new();
    for entry in session.properties() {
        if groups.last() != Some(&entry.group.as_str()) {
            groups.push(&entry.group);
        }
    }
    assert_eq!(groups, vec!["RXClass", "DBObject", "Entity", "Line", "DBObject"]);
}

#[test]
fn contract_synthetic_entries_follow_members() {
    let mut store = MemoryStore::new();
    let points = Value::list("Point3dCollection", vec![]);
    let spline = store
        .record("Spline")
        .field("Degree", 3i64)
        .facet(Facet::ControlPoints, points.clone())
        .facet(Facet::FitPoints, points);
    store.insert_at(1, spline);
    let inspector = Inspector::default();
    let session = Session::open(&store, &inspector, Value::Id(id(1))).unwrap();

    assert_eq!(
        entry_names(session.properties()),
        vec![
            "Name",
            "DxfName",
            "Degree",
            "Control points",
            "Fit points",
            "References to",
            "Referenced by"
        ]
    );
    assert_eq!(entry(session.properties(), "Control points").group, "Spline");
}

#[test]
fn contract_tree_children_keep_store_order() {
    let mut store = MemoryStore::new();
    for (raw, name) in [(2, "Zeta"), (3, "Alpha"), (4, "Mid")] {
        let record = store
            .record("LayerTableRecord")
            .declared("SymbolTableRecord", "Name", name);
        store.insert_at(raw, record);
    }
    let table = store
        .record("LayerTable")
        .entries(vec![id(2), id(3), id(4)]);
    store.insert_at(1, table);
    let inspector = Inspector::default();
    let session = Session::open(&store, &inspector, Value::Id(id(1))).unwrap();

    assert_eq!(
        node_names(session.forest()[0].children()),
        vec!["Zeta", "Alpha", "Mid"]
    );
}
