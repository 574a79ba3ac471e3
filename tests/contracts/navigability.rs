//! Navigability contracts
//!
//! Only values with something underneath may be drilled into: scalars,
//! nulls and empty collections are terminal everywhere.

use crate::common::*;
use dbinspect::domain::entities::TypedValue;
use dbinspect::{Inspector, MemoryStore, Session, Value};

/// CONTRACT: terminal values never navigate
mod terminal_values {
    use super::*;

    #[test]
    fn contract_scalars_and_empty_collections_are_terminal() {
        let store = drawing();
        let inspector = Inspector::default();
        let session = Session::open(&store, &inspector, Value::Id(id(LINE))).unwrap();
        let entries = session.properties();

        for name in ["Name", "DxfName", "Layer", "Secret", "Length", "Tags"] {
            assert!(!entry(entries, name).navigable, "{} should be terminal", name);
        }
    }

    #[test]
    fn contract_activating_terminal_entry_is_rejected() {
        let store = drawing();
        let inspector = Inspector::default();
        let session = Session::open(&store, &inspector, Value::Id(id(LINE))).unwrap();

        for entry in session.properties().iter().filter(|e| !e.navigable) {
            assert!(
                session.on_property_activated(entry).is_err(),
                "{} should not open a session",
                entry.name
            );
        }
    }

    #[test]
    fn contract_stale_member_identity_cannot_be_activated() {
        let mut store = drawing();
        store.erase(id(LAYER0));
        let inspector = Inspector::default();
        let session = Session::open(&store, &inspector, Value::Id(id(LINE))).unwrap();

        let layer = entry(session.properties(), "LayerId");
        assert_eq!(layer.label, "(Null)");
        assert!(!layer.navigable);
        assert!(session.on_property_activated(layer).is_err());
    }

    #[test]
    fn contract_dictionary_entries_never_navigate() {
        let store = MemoryStore::new();
        let inspector = Inspector::default();
        let root = Value::Dict(vec![
            ("a".to_string(), Value::Id(id(1))),
            ("b".to_string(), Value::Int(2)),
        ]);
        let mut session = Session::open(&store, &inspector, Value::list("Wrapper", vec![root])).unwrap();
        let properties = session
            .on_selection_changed(&dbinspect::NodePath::root(0))
            .unwrap();

        assert_eq!(entry_names(properties), vec!["a", "b"]);
        assert!(properties.iter().all(|e| !e.navigable));
    }
}

/// CONTRACT: non-empty collections and identities navigate
mod drillable_values {
    use super::*;

    #[test]
    fn contract_identities_and_filled_collections_navigate() {
        let store = drawing();
        let inspector = Inspector::default();
        let root = Value::list(
            "Values",
            vec![
                Value::Id(id(LAYER0)),
                Value::Ids(vec![id(LINE)]),
                Value::TypedValues(vec![TypedValue {
                    code: 1000,
                    value: Value::text("x"),
                }]),
            ],
        );
        let session = Session::open(&store, &inspector, root).unwrap();

        let flags: Vec<_> = session.forest().iter().map(|n| n.navigable).collect();
        assert_eq!(flags, vec![true, true, true]);
    }

    #[test]
    fn contract_stale_identity_is_a_null_leaf() {
        let mut store = drawing();
        store.erase(id(LINE));
        let inspector = Inspector::default();
        let session = Session::open(&store, &inspector, Value::Ids(vec![id(LINE), id(LAYER0)])).unwrap();

        let stale = &session.forest()[0];
        assert_eq!(stale.name, "(Null)");
        assert!(!stale.navigable);
        assert!(stale.is_built());
        assert!(session.properties().is_empty());
    }
}
