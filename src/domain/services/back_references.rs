//! Reference walks
//!
//! The store keeps no back-reference index, so finding who refers to a
//! record means serializing every reachable record and looking for it.
//! The walk starts at each root registry and descends through ownership
//! edges only. A visited set keeps shared records from being filed twice;
//! beyond that, termination relies on ownership being acyclic in the store.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::entities::{ReferenceKind, ReferenceSet};
use crate::domain::ports::{Gateway, Inspectable, Transaction};
use crate::domain::value_objects::ObjectId;

/// The four reference streams `record` writes out
pub fn references_to(record: &dyn Inspectable) -> ReferenceSet {
    let mut set = ReferenceSet::new();
    record.write_references(&mut set);
    set
}

/// Every record whose reference streams name `target`, partitioned by
/// the kind of edge. Records appear in walk order, each at most once per
/// kind.
pub fn referenced_by<G: Gateway + ?Sized>(
    gateway: &G,
    txn: &Transaction,
    target: ObjectId,
) -> ReferenceSet {
    let mut found = ReferenceSet::new();
    if target.is_null() {
        return found;
    }

    let mut visited = HashSet::new();
    let mut visits = 0usize;
    for root in gateway.root_registries() {
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if current.is_null() || !visited.insert(current) {
                continue;
            }
            let record = match gateway.resolve(txn, current) {
                Ok(record) => record,
                Err(err) => {
                    warn!(id = %current, error = %err, "skipping unreadable record in reference walk");
                    continue;
                }
            };
            visits += 1;

            let filed = references_to(record.as_ref());
            for kind in ReferenceKind::ALL {
                if filed.contains(kind, target) {
                    found.push(kind, current);
                }
            }

            // Reversed so owned records are visited in stream order
            let owned: Vec<ObjectId> = filed.owned().collect();
            stack.extend(owned.into_iter().rev());
        }
    }

    debug!(target = %target, visits, found = found.len(), "back-reference walk complete");
    found
}
