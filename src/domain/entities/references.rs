//! Reference sets - the four identity streams a record writes out
//!
//! `ReferenceSet` doubles as the reference-collecting writer: drive a
//! record's `write_references` into it, then read the four collections.
//! `References` wraps a set as an inspectable engine object so it can be
//! shown in the property sheet and drilled into as four group nodes.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{FieldError, Inspectable, Member, ReferenceWriter};
use crate::domain::value_objects::ObjectId;

use super::value::Value;

/// Kind of reference edge. The order of `ALL` is the fixed group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    HardPointer,
    SoftPointer,
    HardOwnership,
    SoftOwnership,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 4] = [
        ReferenceKind::HardPointer,
        ReferenceKind::SoftPointer,
        ReferenceKind::HardOwnership,
        ReferenceKind::SoftOwnership,
    ];

    /// Group node name
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceKind::HardPointer => "Hard pointer",
            ReferenceKind::SoftPointer => "Soft pointer",
            ReferenceKind::HardOwnership => "Hard ownership",
            ReferenceKind::SoftOwnership => "Soft ownership",
        }
    }

    /// Member name on the `References` wrapper
    pub fn member_name(&self) -> &'static str {
        match self {
            ReferenceKind::HardPointer => "HardPointerIds",
            ReferenceKind::SoftPointer => "SoftPointerIds",
            ReferenceKind::HardOwnership => "HardOwnershipIds",
            ReferenceKind::SoftOwnership => "SoftOwnershipIds",
        }
    }

    pub fn is_ownership(&self) -> bool {
        matches!(self, ReferenceKind::HardOwnership | ReferenceKind::SoftOwnership)
    }
}

/// Four ordered identity streams
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSet {
    #[serde(default)]
    pub hard_pointer: Vec<ObjectId>,
    #[serde(default)]
    pub soft_pointer: Vec<ObjectId>,
    #[serde(default)]
    pub hard_ownership: Vec<ObjectId>,
    #[serde(default)]
    pub soft_ownership: Vec<ObjectId>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self, kind: ReferenceKind) -> &[ObjectId] {
        match kind {
            ReferenceKind::HardPointer => &self.hard_pointer,
            ReferenceKind::SoftPointer => &self.soft_pointer,
            ReferenceKind::HardOwnership => &self.hard_ownership,
            ReferenceKind::SoftOwnership => &self.soft_ownership,
        }
    }

    fn ids_mut(&mut self, kind: ReferenceKind) -> &mut Vec<ObjectId> {
        match kind {
            ReferenceKind::HardPointer => &mut self.hard_pointer,
            ReferenceKind::SoftPointer => &mut self.soft_pointer,
            ReferenceKind::HardOwnership => &mut self.hard_ownership,
            ReferenceKind::SoftOwnership => &mut self.soft_ownership,
        }
    }

    pub fn push(&mut self, kind: ReferenceKind, id: ObjectId) {
        self.ids_mut(kind).push(id);
    }

    pub fn contains(&self, kind: ReferenceKind, id: ObjectId) -> bool {
        self.ids(kind).contains(&id)
    }

    /// Owned children: hard ownership first, then soft ownership
    pub fn owned(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.hard_ownership
            .iter()
            .chain(self.soft_ownership.iter())
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        ReferenceKind::ALL.iter().all(|kind| self.ids(*kind).is_empty())
    }

    pub fn len(&self) -> usize {
        ReferenceKind::ALL.iter().map(|kind| self.ids(*kind).len()).sum()
    }
}

impl ReferenceWriter for ReferenceSet {
    fn write_reference(&mut self, kind: ReferenceKind, id: ObjectId) {
        if !id.is_null() {
            self.push(kind, id);
        }
    }
}

/// Which way a `References` wrapper points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDirection {
    /// Identities the record writes out
    To,
    /// Records whose streams name the record
    By,
}

/// Engine wrapper exposing a reference partition as an inspectable record
#[derive(Debug, Clone)]
pub struct References {
    direction: ReferenceDirection,
    set: ReferenceSet,
}

impl References {
    pub const BASE_TYPE: &'static str = "References";

    pub fn new(direction: ReferenceDirection, set: ReferenceSet) -> Self {
        Self { direction, set }
    }

    pub fn direction(&self) -> ReferenceDirection {
        self.direction
    }

    pub fn set(&self) -> &ReferenceSet {
        &self.set
    }

    fn own_type(&self) -> &'static str {
        match self.direction {
            ReferenceDirection::To => "ReferencesTo",
            ReferenceDirection::By => "ReferencedBy",
        }
    }
}

impl Inspectable for References {
    fn lineage(&self) -> Vec<&str> {
        vec![self.own_type(), Self::BASE_TYPE]
    }

    fn declared_members(&self, type_name: &str) -> Vec<Member> {
        if type_name != Self::BASE_TYPE {
            return Vec::new();
        }
        ReferenceKind::ALL
            .iter()
            .map(|kind| Member::property(kind.member_name()))
            .collect()
    }

    fn get(&self, member: &str) -> Result<Value, FieldError> {
        ReferenceKind::ALL
            .iter()
            .find(|kind| kind.member_name() == member)
            .map(|kind| Value::Ids(self.set.ids(*kind).to_vec()))
            .ok_or_else(|| FieldError::Missing(member.to_string()))
    }
}
