//! Scenario: drilling into derived views
//!
//! Journey: a user drills from a solid into its boundary representation,
//! and from a layer into the records that refer to it, then closes every
//! window.

use crate::common::*;
use dbinspect::domain::entities::NodePath;
use dbinspect::{Inspector, Session, Value};

/// SCENARIO: solid -> boundary representation topology
#[test]
fn scenario_boundary_representation_topology() {
    let store = drawing();
    let inspector = Inspector::default();
    let mut solid = Session::open(&store, &inspector, Value::Id(id(SOLID))).unwrap();

    let brep = entry(solid.properties(), "Boundary representation").clone();
    assert!(brep.navigable);
    assert_eq!(brep.label, "< Brep >");

    let mut topology = solid.on_property_activated(&brep).unwrap();
    assert_eq!(topology.depth(), 1);
    let root = &topology.forest()[0];
    assert_eq!(root.name, "< Brep >");
    assert!(root.expanded);

    // Built in one pass, five levels deep
    let loop_path = NodePath::from_indices(vec![0, 0, 0, 0, 0]);
    let boundary = topology.node(&loop_path).unwrap();
    assert_eq!(boundary.name, "< BoundaryLoop >");
    assert_eq!(node_names(boundary.children()), vec!["< Edge >"; 3]);
    assert_eq!(entry_names(topology.properties()), vec!["IsValid", "Complexes"]);

    // The scratch brep belongs to the window that read it
    assert_eq!(topology.on_close(), 0);
    drop(topology);
    assert_eq!(store.disposal_log().disposed(), 0);
    assert_eq!(solid.on_close(), 1);
    assert_eq!(store.disposal_log().disposed(), 1);
}

/// SCENARIO: layer -> referenced by -> referring records
#[test]
fn scenario_referenced_by_groups() {
    let store = drawing();
    let inspector = Inspector::default();
    let layer = Session::open(&store, &inspector, Value::Id(id(LAYER0))).unwrap();

    let referenced_by = entry(layer.properties(), "Referenced by").clone();
    assert_eq!(referenced_by.label, "< Inspector.ReferencedBy >");
    let groups = layer.on_property_activated(&referenced_by).unwrap();

    assert_eq!(
        node_names(groups.forest()),
        vec!["Hard pointer", "Soft pointer", "Hard ownership", "Soft ownership"]
    );
    let flags: Vec<_> = groups.forest().iter().map(|g| g.navigable).collect();
    assert_eq!(flags, vec![false, true, true, false]);
    assert!(groups.forest()[0].selected);

    let soft = &groups.forest()[1];
    assert_eq!(node_names(soft.children()), vec!["< Line 4 >", "< Solid3d 8 >"]);
    let owners = &groups.forest()[2];
    assert_eq!(node_names(owners.children()), vec!["< LayerTable 2 >"]);
}

/// SCENARIO: references to, disabled back references
#[test]
fn scenario_back_references_can_be_switched_off() {
    let store = drawing();
    let mut config = dbinspect::InspectorConfig::default();
    config.properties.back_references = false;
    let inspector = Inspector::from_config(&config);
    let line = Session::open(&store, &inspector, Value::Id(id(LINE))).unwrap();

    let names = entry_names(line.properties());
    assert!(names.contains(&"References to"));
    assert!(!names.contains(&"Referenced by"));

    let references_to = entry(line.properties(), "References to").clone();
    let groups = line.on_property_activated(&references_to).unwrap();
    let soft = &groups.forest()[1];
    assert_eq!(node_names(soft.children()), vec!["< LayerTableRecord 3 >"]);
}
