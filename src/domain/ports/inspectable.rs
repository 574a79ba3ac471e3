//! Inspectable port - reflection over records from the store
//!
//! The store's records describe themselves through this trait instead of
//! runtime reflection: their type lineage, the members each type declares,
//! and a way to evaluate a member by name. Engine-synthesized wrappers
//! (reference partitions, topology records) implement it too.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::Value;
use crate::domain::value_objects::{Handle, ObjectId};

use super::reference_writer::ReferenceWriter;

/// Failure evaluating a single member
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Accessor failed; the message is shown as the member's value
    #[error("{0}")]
    Failed(String),

    /// Record was torn down before the read
    #[error("object has been disposed")]
    Disposed,

    /// No member with that name
    #[error("no member named '{0}'")]
    Missing(String),
}

/// How a declared member is exposed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    /// Plain readable property
    Property,
    /// Parameterized accessor, never listed
    Indexer,
    /// Deprecated property: listed with its message, never evaluated
    Obsolete(String),
}

/// A member declared by one type of a record's lineage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
}

impl Member {
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
        }
    }

    pub fn indexer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Indexer,
        }
    }

    pub fn obsolete(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Obsolete(message.into()),
        }
    }
}

/// Type-gated derived data a record can expose beyond its members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    ControlPoints,
    FitPoints,
    Knots,
    Weights,
    /// Ids of the entities a block definition contains
    BlockMembers,
    /// Ids of the references inserting a block definition
    BlockReferences { direct_only: bool },
    HatchLoops,
    Viewports,
    GroupMembers,
    AllowedValues,
    Vertices,
}

/// A record the inspector can reflect over
///
/// Only `lineage`, `declared_members` and `get` are required; everything
/// else defaults to "not applicable".
pub trait Inspectable: fmt::Debug {
    /// Type names from the most derived type up to the root of the hierarchy
    fn lineage(&self) -> Vec<&str>;

    /// Runtime type name
    fn type_name(&self) -> &str {
        self.lineage().first().copied().unwrap_or("Object")
    }

    /// Members declared by `type_name` itself, in declaration order
    fn declared_members(&self, type_name: &str) -> Vec<Member>;

    /// Evaluate a member
    fn get(&self, member: &str) -> Result<Value, FieldError>;

    /// Identity in the store; null for scratch and engine records
    fn object_id(&self) -> ObjectId {
        ObjectId::NULL
    }

    /// Persistent handle; default for records never added to the store
    fn handle(&self) -> Handle {
        Handle::default()
    }

    fn is_persistent(&self) -> bool {
        !self.handle().is_default()
    }

    /// Class DXF name, when the type has one
    fn dxf_name(&self) -> Option<&str> {
        None
    }

    /// Entries of a symbol table (`Ids`) or a dictionary (`Dict` of ids)
    fn contents(&self) -> Option<Value> {
        None
    }

    /// Derived data, `None` when the facet does not apply to this record
    fn facet(&self, _facet: Facet) -> Option<Value> {
        None
    }

    /// Serialize the record's references into `writer`
    fn write_references(&self, _writer: &mut dyn ReferenceWriter) {}

    /// Release a scratch record. Calling it again does nothing.
    fn dispose(&self) {}

    fn is_disposed(&self) -> bool {
        false
    }
}
