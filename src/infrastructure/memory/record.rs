//! Stored records and their builder
//!
//! A `RecordBuilder` describes a record: its class lineage, members,
//! contents, facets and reference streams. The store materializes a fresh
//! `StoredRecord` from it on every read, the way a real store hands out a
//! new wrapper each time an object is opened.

use std::cell::Cell;
use std::rc::Rc;

use crate::domain::entities::{ReferenceKind, ReferenceSet, Value};
use crate::domain::ports::{Facet, FieldError, Inspectable, Member, MemberKind, ReferenceWriter};
use crate::domain::value_objects::{Handle, ObjectId};

/// Store-wide disposal counters
#[derive(Debug, Default)]
pub struct DisposalLog {
    disposed: Cell<usize>,
    redundant: Cell<usize>,
}

impl DisposalLog {
    /// Records torn down
    pub fn disposed(&self) -> usize {
        self.disposed.get()
    }

    /// Dispose calls on records already torn down
    pub fn redundant(&self) -> usize {
        self.redundant.get()
    }
}

/// Teardown flag shared by a scratch record and everything built beneath it
#[derive(Debug)]
pub(crate) struct Lifetime {
    disposed: Cell<bool>,
    log: Rc<DisposalLog>,
}

impl Lifetime {
    pub(crate) fn fresh(log: &Rc<DisposalLog>) -> Rc<Self> {
        Rc::new(Self {
            disposed: Cell::new(false),
            log: Rc::clone(log),
        })
    }

    fn dispose(&self) {
        if self.disposed.replace(true) {
            self.log.redundant.set(self.log.redundant.get() + 1);
        } else {
            self.log.disposed.set(self.log.disposed.get() + 1);
        }
    }

    fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}

/// How a member produces its value
#[derive(Debug, Clone)]
pub enum FieldSpec {
    Value(Value),
    /// A nested record, materialized on each read
    Record(Box<RecordBuilder>),
    /// A named collection of nested records
    Records {
        type_name: String,
        items: Vec<RecordBuilder>,
    },
    /// Accessor fails with this message
    Failing(String),
}

#[derive(Debug, Clone)]
struct MemberSpec {
    declared_by: String,
    member: Member,
    field: Option<FieldSpec>,
}

/// Description of a record
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    lineage: Vec<String>,
    dxf_name: Option<String>,
    members: Vec<MemberSpec>,
    contents: Option<Value>,
    facets: Vec<(Facet, Value)>,
    references: ReferenceSet,
}

impl RecordBuilder {
    /// A record of the given lineage (most derived first)
    pub fn new(lineage: Vec<String>) -> Self {
        Self {
            lineage,
            dxf_name: None,
            members: Vec::new(),
            contents: None,
            facets: Vec::new(),
            references: ReferenceSet::new(),
        }
    }

    pub fn class(&self) -> &str {
        self.lineage.first().map(String::as_str).unwrap_or("Object")
    }

    pub fn dxf_name(mut self, dxf_name: impl Into<String>) -> Self {
        self.dxf_name = Some(dxf_name.into());
        self
    }

    fn push(mut self, declared_by: String, member: Member, field: Option<FieldSpec>) -> Self {
        self.members.push(MemberSpec {
            declared_by,
            member,
            field,
        });
        self
    }

    /// Member declared by the record's own class
    pub fn field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let class = self.class().to_string();
        self.declared(class, name, value)
    }

    /// Member declared by one of the record's base types
    pub fn declared(
        self,
        declared_by: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.push(
            declared_by.into(),
            Member::property(name),
            Some(FieldSpec::Value(value.into())),
        )
    }

    pub fn nested(self, name: impl Into<String>, record: RecordBuilder) -> Self {
        let class = self.class().to_string();
        self.push(
            class,
            Member::property(name),
            Some(FieldSpec::Record(Box::new(record))),
        )
    }

    pub fn nested_list(
        self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        items: Vec<RecordBuilder>,
    ) -> Self {
        let class = self.class().to_string();
        self.push(
            class,
            Member::property(name),
            Some(FieldSpec::Records {
                type_name: type_name.into(),
                items,
            }),
        )
    }

    pub fn failing(self, name: impl Into<String>, message: impl Into<String>) -> Self {
        let class = self.class().to_string();
        self.push(
            class,
            Member::property(name),
            Some(FieldSpec::Failing(message.into())),
        )
    }

    pub fn obsolete(self, name: impl Into<String>, message: impl Into<String>) -> Self {
        let class = self.class().to_string();
        self.push(class, Member::obsolete(name, message), None)
    }

    pub fn indexer(self, name: impl Into<String>) -> Self {
        let class = self.class().to_string();
        self.push(class, Member::indexer(name), None)
    }

    /// Member with an explicit declaring type and spec
    pub fn member(
        self,
        declared_by: impl Into<String>,
        name: impl Into<String>,
        field: FieldSpec,
    ) -> Self {
        self.push(declared_by.into(), Member::property(name), Some(field))
    }

    /// Symbol-table entries
    pub fn entries(mut self, ids: Vec<ObjectId>) -> Self {
        self.contents = Some(Value::Ids(ids));
        self
    }

    /// One dictionary entry
    pub fn entry(mut self, key: impl Into<String>, id: ObjectId) -> Self {
        let entry = (key.into(), Value::Id(id));
        match &mut self.contents {
            Some(Value::Dict(entries)) => entries.push(entry),
            _ => self.contents = Some(Value::Dict(vec![entry])),
        }
        self
    }

    pub fn facet(mut self, facet: Facet, value: Value) -> Self {
        self.facets.push((facet, value));
        self
    }

    pub fn references(mut self, kind: ReferenceKind, id: ObjectId) -> Self {
        self.references.push(kind, id);
        self
    }

    pub fn hard_owns(self, id: ObjectId) -> Self {
        self.references(ReferenceKind::HardOwnership, id)
    }

    pub fn soft_owns(self, id: ObjectId) -> Self {
        self.references(ReferenceKind::SoftOwnership, id)
    }

    pub fn hard_points_to(self, id: ObjectId) -> Self {
        self.references(ReferenceKind::HardPointer, id)
    }

    pub fn soft_points_to(self, id: ObjectId) -> Self {
        self.references(ReferenceKind::SoftPointer, id)
    }

    pub(crate) fn set_reference_set(&mut self, references: ReferenceSet) {
        self.references = references;
    }

    pub(crate) fn dxf_name_from(mut self, dxf_name: Option<&str>) -> Self {
        if self.dxf_name.is_none() {
            self.dxf_name = dxf_name.map(str::to_string);
        }
        self
    }

    pub(crate) fn materialize(
        &self,
        id: ObjectId,
        handle: Handle,
        lifetime: Rc<Lifetime>,
    ) -> StoredRecord {
        StoredRecord {
            id,
            handle,
            spec: self.clone(),
            lifetime,
        }
    }
}

/// A record as read from the store
#[derive(Debug)]
pub struct StoredRecord {
    id: ObjectId,
    handle: Handle,
    spec: RecordBuilder,
    lifetime: Rc<Lifetime>,
}

impl StoredRecord {
    /// Lifetime for records built beneath this one: scratch records share
    /// their own, persistent records hand out independent scratch records
    fn child_lifetime(&self) -> Rc<Lifetime> {
        if self.is_persistent() {
            Lifetime::fresh(&self.lifetime.log)
        } else {
            Rc::clone(&self.lifetime)
        }
    }

    fn scratch(&self, builder: &RecordBuilder) -> Value {
        let record = builder.materialize(ObjectId::NULL, Handle::default(), self.child_lifetime());
        Value::Object(Rc::new(record))
    }

    fn check_alive(&self) -> Result<(), FieldError> {
        if self.lifetime.is_disposed() {
            Err(FieldError::Disposed)
        } else {
            Ok(())
        }
    }
}

impl Inspectable for StoredRecord {
    fn lineage(&self) -> Vec<&str> {
        self.spec.lineage.iter().map(String::as_str).collect()
    }

    fn declared_members(&self, type_name: &str) -> Vec<Member> {
        self.spec
            .members
            .iter()
            .filter(|spec| spec.declared_by == type_name)
            .map(|spec| spec.member.clone())
            .collect()
    }

    fn get(&self, member: &str) -> Result<Value, FieldError> {
        self.check_alive()?;
        let spec = self
            .spec
            .members
            .iter()
            .find(|spec| spec.member.name == member)
            .ok_or_else(|| FieldError::Missing(member.to_string()))?;
        match (&spec.member.kind, &spec.field) {
            (MemberKind::Obsolete(message), _) => Ok(Value::Text(message.clone())),
            (_, Some(FieldSpec::Value(value))) => Ok(value.clone()),
            (_, Some(FieldSpec::Record(builder))) => Ok(self.scratch(builder)),
            (_, Some(FieldSpec::Records { type_name, items })) => Ok(Value::list(
                type_name.clone(),
                items.iter().map(|item| self.scratch(item)).collect(),
            )),
            (_, Some(FieldSpec::Failing(message))) => Err(FieldError::Failed(message.clone())),
            (_, None) => Err(FieldError::Failed(format!(
                "member '{}' takes parameters",
                member
            ))),
        }
    }

    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn handle(&self) -> Handle {
        self.handle
    }

    fn dxf_name(&self) -> Option<&str> {
        self.spec.dxf_name.as_deref()
    }

    fn contents(&self) -> Option<Value> {
        self.spec.contents.clone()
    }

    fn facet(&self, facet: Facet) -> Option<Value> {
        self.spec
            .facets
            .iter()
            .find(|(candidate, _)| *candidate == facet)
            .map(|(_, value)| value.clone())
    }

    fn write_references(&self, writer: &mut dyn ReferenceWriter) {
        for kind in ReferenceKind::ALL {
            for id in self.spec.references.ids(kind) {
                writer.write_reference(kind, *id);
            }
        }
    }

    fn dispose(&self) {
        self.lifetime.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.lifetime.is_disposed()
    }
}
