//! Disposal tracker - scratch records a session must release
//!
//! Records are keyed by allocation identity, not by value: two equal
//! scratch records are still two things to release.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use crate::domain::ports::Inspectable;

/// Per-session set of ownerless records, drained once at teardown
#[derive(Debug, Default)]
pub struct DisposalTracker {
    records: Vec<Rc<dyn Inspectable>>,
    seen: HashSet<*const ()>,
}

impl DisposalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `record`. Returns false if it is already tracked.
    pub fn track(&mut self, record: Rc<dyn Inspectable>) -> bool {
        let key = Rc::as_ptr(&record) as *const ();
        if !self.seen.insert(key) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dispose every tracked record not already disposed and empty the set.
    ///
    /// Returns the number of records actually disposed; a second flush
    /// returns zero.
    pub fn flush(&mut self) -> usize {
        let mut disposed = 0;
        for record in self.records.drain(..) {
            if !record.is_disposed() {
                record.dispose();
                disposed += 1;
            }
        }
        self.seen.clear();
        debug!(disposed, "flushed disposal tracker");
        disposed
    }
}
