//! Identity value objects
//!
//! - `ObjectId` - session-scoped reference into the record store
//! - `Handle` - persistent identity token, stable across sessions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolvable reference into the record store.
///
/// `ObjectId::NULL` is the null sentinel: it never resolves and is never
/// navigable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    /// The null identity sentinel
    pub const NULL: ObjectId = ObjectId(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns true for the null sentinel
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "(0)")
        } else {
            write!(f, "({})", self.0)
        }
    }
}

/// Persistent identity token of a record.
///
/// Records that were never added to the store (scratch records) carry the
/// default handle `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(u64);

impl Handle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns true if this is the default (non-persistent) handle
    pub fn is_default(&self) -> bool {
        self.0 == 0
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}
