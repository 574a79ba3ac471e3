//! Scenario: reading a property sheet
//!
//! Journey: a user selects a line and reads every member, including ones
//! whose accessor fails, empty collections and a member pointing back at
//! the line itself.

use crate::common::*;
use dbinspect::{Inspector, Session, Value};

fn line_sheet() -> Vec<dbinspect::PropertyEntry> {
    let store = drawing();
    let inspector = Inspector::default();
    let session = Session::open(&store, &inspector, Value::Id(id(LINE))).unwrap();
    session.properties().to_vec()
}

/// SCENARIO: a failing accessor degrades one row and the walk goes on
#[test]
fn scenario_failing_accessor_degrades_one_row() {
    let entries = line_sheet();
    let names = entry_names(&entries);
    let secret = names.iter().position(|n| *n == "Secret").unwrap();

    assert_eq!(entries[secret].value, Value::text("permission denied"));
    assert_eq!(entries[secret].label, "permission denied");
    assert!(!entries[secret].navigable);
    assert_eq!(names[secret + 1], "Length");
}

/// SCENARIO: an empty collection-valued member
#[test]
fn scenario_empty_collection_is_terminal() {
    let entries = line_sheet();
    let tags = entry(&entries, "Tags");

    assert_eq!(tags.label, "< StringCollection >");
    assert!(!tags.navigable);
}

/// SCENARIO: a member resolving back to the inspected record
#[test]
fn scenario_self_reference_is_shown_but_terminal() {
    let entries = line_sheet();
    let owner = entry(&entries, "Owner");

    assert_eq!(owner.value, Value::Id(id(LINE)));
    assert_eq!(owner.label, "< Line 4 >");
    assert!(!owner.navigable);
    assert!(entry(&entries, "LayerId").navigable);
}

/// SCENARIO: the full sheet of a line, class first, references last
#[test]
fn scenario_line_sheet_layout() {
    let entries = line_sheet();

    assert_eq!(
        entry_names(&entries),
        vec![
            "Name",
            "DxfName",
            "Owner",
            "Layer",
            "LayerId",
            "Secret",
            "Length",
            "Tags",
            "References to",
            "Referenced by"
        ]
    );
    assert_eq!(entry(&entries, "DxfName").label, "LINE");
    assert_eq!(entry(&entries, "Length").label, "2.5000");
    assert_eq!(entry(&entries, "References to").label, "< Inspector.ReferencesTo >");
    assert_eq!(entry(&entries, "References to").group, "DBObject");
}
