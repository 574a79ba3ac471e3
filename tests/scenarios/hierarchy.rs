//! Scenario: browsing the hierarchy tree
//!
//! Journey: a user opens the inspector on a registry or on a set of
//! identities, reads the tree and selects a node.

use crate::common::*;
use dbinspect::{Inspector, MemoryStore, NodePath, Session, Value};

/// SCENARIO: a registry holding one named entry
#[test]
fn scenario_registry_entry_is_named_by_its_key() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut session = Session::open(&store, &inspector, Value::Id(id(LAYER_REGISTRY))).unwrap();

    // One root, auto-expanded, holding the single entry
    assert_eq!(session.forest().len(), 1);
    let root = &session.forest()[0];
    assert!(root.expanded);
    assert_eq!(node_names(root.children()), vec!["Layer0"]);

    // Selecting the entry lists the record's own Name
    let properties = session
        .on_selection_changed(&NodePath::from_indices(vec![0, 0]))
        .unwrap();
    let name = entry_in(properties, "SymbolTableRecord", "Name");
    assert_eq!(name.value, Value::text("Layer0"));
    assert!(!name.navigable);
}

/// SCENARIO: the same registry loaded from a JSON document
#[test]
fn scenario_registry_from_json_document() {
    let store = MemoryStore::from_json(LAYERS_JSON).unwrap();
    let inspector = Inspector::default();
    let session = Session::open(&store, &inspector, Value::Id(id(NOD))).unwrap();

    let root = &session.forest()[0];
    assert_eq!(root.name, "Named Objects Dictionary");
    assert_eq!(node_names(root.children()), vec!["Layers"]);
}

/// SCENARIO: an ordered collection of three references
#[test]
fn scenario_identity_collection_keeps_source_order() {
    let store = drawing();
    let inspector = Inspector::default();
    let root = Value::Ids(vec![id(LAYER0), id(LINE), id(SOLID)]);
    let session = Session::open(&store, &inspector, root).unwrap();

    assert_eq!(
        node_names(session.forest()),
        vec!["< LayerTableRecord 3 >", "< Line 4 >", "< Solid3d 8 >"]
    );
    assert!(session.forest()[0].selected);
    assert!(session.forest()[1..].iter().all(|n| !n.selected));
    assert_eq!(session.selected(), Some(&NodePath::root(0)));
    assert_eq!(entry(session.properties(), "Name").value, Value::text("LayerTableRecord"));
}

/// SCENARIO: walking the symbol tables and reading the outline
#[test]
fn scenario_expand_symbol_table_and_render_outline() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut session = Session::open(&store, &inspector, Value::Id(id(BLOCK_TABLE))).unwrap();

    let model_space = NodePath::from_indices(vec![0, 0]);
    let node = session.expand(&model_space).unwrap();
    assert!(node.expanded);
    assert!(node.children().is_empty(), "block records list no tree children");

    let rows = session.outline();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "*Model_Space");
    assert_eq!(rows[1].depth, 1);
    assert!(rows[0].selected);
}
