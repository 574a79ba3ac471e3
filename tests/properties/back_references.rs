//! Property tests for the back-reference walk.
//!
//! Random stores: records 2..=n each owned by one earlier record (so
//! ownership is a tree under the named-object registry, record 1), plus
//! random pointer edges between any two records.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::sample::Index;

use dbinspect::domain::entities::{ReferenceKind, ReferenceSet};
use dbinspect::domain::services::referenced_by;
use dbinspect::domain::value_objects::ObjectId;
use dbinspect::{Gateway, MemoryStore};

#[derive(Debug, Clone)]
struct Graph {
    /// `streams[i]` is what record `i + 1` writes out
    streams: Vec<ReferenceSet>,
}

fn graph() -> impl Strategy<Value = Graph> {
    let owners = prop::collection::vec((any::<Index>(), any::<bool>()), 1..12);
    let pointers = prop::collection::vec((any::<Index>(), any::<Index>(), any::<bool>()), 0..24);
    (owners, pointers).prop_map(|(owners, pointers)| {
        let count = owners.len() + 1;
        let mut streams = vec![ReferenceSet::new(); count];
        for (offset, (owner, soft)) in owners.iter().enumerate() {
            let child = offset + 1;
            let kind = if *soft {
                ReferenceKind::SoftOwnership
            } else {
                ReferenceKind::HardOwnership
            };
            streams[owner.index(child)].push(kind, ObjectId::new(child as u64 + 1));
        }
        for (from, to, soft) in pointers {
            let kind = if soft {
                ReferenceKind::SoftPointer
            } else {
                ReferenceKind::HardPointer
            };
            let target = ObjectId::new(to.index(count) as u64 + 1);
            streams[from.index(count)].push(kind, target);
        }
        Graph { streams }
    })
}

fn store(graph: &Graph) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (index, stream) in graph.streams.iter().enumerate() {
        let mut record = store.record("Xrecord");
        for kind in ReferenceKind::ALL {
            for target in stream.ids(kind) {
                record = record.references(kind, *target);
            }
        }
        store.insert_at(index as u64 + 1, record);
    }
    store.set_named_registry(ObjectId::new(1));
    store
}

fn expected(graph: &Graph, target: ObjectId, kind: ReferenceKind) -> BTreeSet<ObjectId> {
    graph
        .streams
        .iter()
        .enumerate()
        .filter(|(_, stream)| stream.contains(kind, target))
        .map(|(index, _)| ObjectId::new(index as u64 + 1))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every record whose stream names the target is found,
    /// under the right kind, exactly once; nothing else is.
    #[test]
    fn property_referenced_by_is_complete_and_exact(graph in graph()) {
        let store = store(&graph);
        let txn = store.open_read().unwrap();

        for raw in 1..=graph.streams.len() as u64 {
            let target = ObjectId::new(raw);
            let found = referenced_by(&store, &txn, target);
            for kind in ReferenceKind::ALL {
                let ids = found.ids(kind);
                let unique: BTreeSet<ObjectId> = ids.iter().copied().collect();
                prop_assert_eq!(unique.len(), ids.len(), "duplicates under {:?}", kind);
                prop_assert_eq!(unique, expected(&graph, target, kind));
            }
        }
        store.commit(txn).unwrap();
    }
}
