//! Property enumerator - the property sheet of a selected value
//!
//! Members are listed base-to-derived along the record's lineage, each
//! type contributing only what it declares, starting below the first stop
//! ancestor. A failing accessor degrades its own row and enumeration goes
//! on. Type-gated synthetic entries follow the members, then the forward
//! and backward reference partitions of persistent records.

use std::rc::Rc;

use tracing::debug;

use crate::domain::entities::{PropertyEntry, ReferenceDirection, References, Value, CLASS_GROUP};
use crate::domain::ports::{Gateway, Inspectable, MemberKind, Transaction};
use crate::domain::value_objects::NumberFormat;

use super::back_references::{referenced_by, references_to};
use super::disposal::DisposalTracker;
use super::formatter::{LabelFormatter, NULL_LABEL};
use super::oracle::is_navigable_in;
use super::registry::{Origin, ShapeRegistry, SyntheticSource};

/// Member whose value is meaningless on records without a handle
const OWNER_MEMBER: &str = "OwnerId";

/// Knobs of the member walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratorOptions {
    /// Types where the lineage walk stops (exclusive)
    pub stop_ancestors: Vec<String>,
    /// Compute the "Referenced by" entry (walks the whole store)
    pub back_references: bool,
}

impl Default for EnumeratorOptions {
    fn default() -> Self {
        Self {
            stop_ancestors: vec!["Drawable".to_string(), "DisposableWrapper".to_string()],
            back_references: true,
        }
    }
}

/// Lists property entries of values read through one gateway
pub struct PropertyEnumerator<'a, G: Gateway + ?Sized> {
    gateway: &'a G,
    registry: &'a ShapeRegistry,
    formatter: LabelFormatter<'a, G>,
    options: &'a EnumeratorOptions,
}

impl<'a, G: Gateway + ?Sized> PropertyEnumerator<'a, G> {
    pub fn new(
        gateway: &'a G,
        registry: &'a ShapeRegistry,
        format: NumberFormat,
        options: &'a EnumeratorOptions,
    ) -> Self {
        Self {
            gateway,
            registry,
            formatter: LabelFormatter::new(gateway, registry, format),
            options,
        }
    }

    /// Property entries of `value`. Scratch records met on the way are
    /// handed to `tracker`.
    pub fn list(
        &self,
        txn: &Transaction,
        value: &Value,
        tracker: &mut DisposalTracker,
    ) -> Vec<PropertyEntry> {
        let entries = match value {
            Value::Id(id) if !id.is_null() => match self.gateway.resolve(txn, *id) {
                Ok(record) => {
                    let mut entries = self.class_entries(record.as_ref());
                    entries.extend(self.record_entries(txn, &record, tracker));
                    entries
                }
                Err(err) => {
                    debug!(id = %id, error = %err, "nothing to list for stale identity");
                    Vec::new()
                }
            },
            Value::Object(record) => self.record_entries(txn, record, tracker),
            Value::Ids(ids) => ids
                .iter()
                .enumerate()
                .map(|(i, id)| self.entry(txn, format!("[{}]", i), Value::Id(*id), "ObjectIdCollection"))
                .collect(),
            Value::List(collection) => collection
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    self.entry(txn, format!("[{}]", i), item.clone(), &collection.type_name)
                })
                .collect(),
            Value::Dict(pairs) => pairs
                .iter()
                .map(|(key, item)| {
                    let label = self.formatter.label(txn, item);
                    PropertyEntry::new(key.clone(), item.clone(), label, "Dictionary", false)
                })
                .collect(),
            Value::TypedValues(values) => values
                .iter()
                .map(|typed| {
                    let label = self.formatter.label(txn, &typed.value);
                    PropertyEntry::new(
                        typed.code.to_string(),
                        typed.value.clone(),
                        label,
                        "ResultBuffer",
                        false,
                    )
                })
                .collect(),
            _ => Vec::new(),
        };
        debug!(count = entries.len(), "listed properties");
        entries
    }

    /// Runtime class of an identity: its name and DXF name
    fn class_entries(&self, record: &dyn Inspectable) -> Vec<PropertyEntry> {
        let mut entries = vec![PropertyEntry::new(
            "Name",
            Value::text(record.type_name()),
            record.type_name(),
            CLASS_GROUP,
            false,
        )];
        if let Some(dxf_name) = record.dxf_name() {
            entries.push(PropertyEntry::new(
                "DxfName",
                Value::text(dxf_name),
                dxf_name,
                CLASS_GROUP,
                false,
            ));
        }
        entries
    }

    fn record_entries(
        &self,
        txn: &Transaction,
        record: &Rc<dyn Inspectable>,
        tracker: &mut DisposalTracker,
    ) -> Vec<PropertyEntry> {
        let resolved = self.registry.resolve(record.as_ref());
        let mut entries = Vec::new();

        for type_name in self.walked_types(record.as_ref()) {
            for member in record.declared_members(type_name) {
                if resolved.as_ref().is_some_and(|r| r.hides(&member.name)) {
                    continue;
                }
                match member.kind {
                    MemberKind::Indexer => continue,
                    MemberKind::Obsolete(message) => {
                        entries.push(PropertyEntry::degraded(member.name, message, type_name));
                        continue;
                    }
                    MemberKind::Property => {}
                }
                if member.name == OWNER_MEMBER && !record.is_persistent() {
                    entries.push(PropertyEntry::new(
                        member.name,
                        Value::Null,
                        NULL_LABEL,
                        type_name,
                        false,
                    ));
                    continue;
                }
                match record.get(&member.name) {
                    Ok(value) => {
                        self.track_scratch(record, &value, tracker);
                        let navigable = is_navigable_in(self.gateway, txn, &value, self.registry)
                            && !value.designates(record);
                        let label = self.formatter.label(txn, &value);
                        entries.push(PropertyEntry::new(member.name, value, label, type_name, navigable));
                    }
                    Err(err) => {
                        entries.push(PropertyEntry::degraded(member.name, err.to_string(), type_name));
                    }
                }
            }
        }

        if let Some(resolved) = &resolved {
            for synthetic in &resolved.synthetic {
                let value = match &synthetic.source {
                    SyntheticSource::Facet(facet) => match record.facet(*facet) {
                        Some(value) => value,
                        None => continue,
                    },
                    SyntheticSource::BoundaryRepresentation => {
                        match self.gateway.boundary_representation(txn, record.object_id()) {
                            Ok(brep) => {
                                tracker.track(Rc::clone(&brep));
                                Value::Object(brep)
                            }
                            Err(err) => {
                                entries.push(PropertyEntry::degraded(
                                    synthetic.name.clone(),
                                    err.to_string(),
                                    synthetic.group.clone(),
                                ));
                                continue;
                            }
                        }
                    }
                };
                entries.push(self.entry(txn, synthetic.name.clone(), value, &synthetic.group));
            }
        }

        if record.is_persistent() {
            entries.extend(self.reference_entries(txn, record.as_ref()));
        }
        entries
    }

    /// Lineage from the first type below a stop ancestor down to the most
    /// derived type
    fn walked_types<'r>(&self, record: &'r dyn Inspectable) -> Vec<&'r str> {
        let mut types: Vec<&str> = record
            .lineage()
            .into_iter()
            .take_while(|type_name| !self.options.stop_ancestors.iter().any(|stop| stop == type_name))
            .collect();
        types.reverse();
        types
    }

    fn reference_entries(&self, txn: &Transaction, record: &dyn Inspectable) -> Vec<PropertyEntry> {
        let group = self.persistent_group(record);
        let mut entries = Vec::with_capacity(2);

        let to = Value::object(References::new(ReferenceDirection::To, references_to(record)));
        entries.push(self.entry(txn, "References to".to_string(), to, &group));

        if self.options.back_references {
            let set = referenced_by(self.gateway, txn, record.object_id());
            let by = Value::object(References::new(ReferenceDirection::By, set));
            entries.push(self.entry(txn, "Referenced by".to_string(), by, &group));
        }
        entries
    }

    /// Base persistent type the reference entries are grouped under
    fn persistent_group(&self, record: &dyn Inspectable) -> String {
        self.walked_types(record)
            .first()
            .map(|type_name| type_name.to_string())
            .unwrap_or_else(|| record.type_name().to_string())
    }

    fn entry(&self, txn: &Transaction, name: String, value: Value, group: &str) -> PropertyEntry {
        let navigable = is_navigable_in(self.gateway, txn, &value, self.registry);
        let label = self.formatter.label(txn, &value);
        PropertyEntry::new(name, value, label, group, navigable)
    }

    /// Records read out of a member of a store record have no owner and
    /// must be released by the session. Members of a scratch record belong
    /// to that record.
    fn track_scratch(
        &self,
        owner: &Rc<dyn Inspectable>,
        value: &Value,
        tracker: &mut DisposalTracker,
    ) {
        if !owner.is_persistent() {
            return;
        }
        let Some(record) = value.as_object() else {
            return;
        };
        if record.is_persistent() {
            return;
        }
        let origin = self.registry.resolve(record.as_ref()).map(|r| r.origin);
        if origin != Some(Origin::Engine) {
            tracker.track(Rc::clone(record));
        }
    }
}
