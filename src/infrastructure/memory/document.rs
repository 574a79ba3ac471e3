//! JSON fixture documents
//!
//! A document lists extra classes, records, boundary representations and
//! the roots of the store:
//!
//! ```json
//! {
//!   "named_registry": 1,
//!   "roots": [2],
//!   "records": [
//!     { "id": 1, "class": "DBDictionary", "dictionary": [["ACAD_GROUP", 3]] },
//!     { "id": 2, "class": "LayerTable", "entries": [4] },
//!     { "id": 4, "class": "LayerTableRecord",
//!       "fields": [{ "name": "Name", "value": { "text": "0" } }] }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::domain::entities::{ReferenceSet, TypedValue, Value};
use crate::domain::ports::Facet;
use crate::domain::value_objects::{Handle, ObjectId, Point2d, Point3d, Vector2d, Vector3d};

use super::record::{FieldSpec, RecordBuilder};
use super::store::MemoryStore;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoreDocument {
    #[serde(default)]
    classes: Vec<ClassDocument>,
    #[serde(default)]
    named_registry: Option<u64>,
    #[serde(default)]
    roots: Vec<u64>,
    #[serde(default)]
    records: Vec<PersistentDocument>,
    #[serde(default)]
    breps: Vec<BrepDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassDocument {
    name: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    dxf_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PersistentDocument {
    id: u64,
    #[serde(flatten)]
    record: RecordDocument,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BrepDocument {
    of: u64,
    record: RecordDocument,
}

#[derive(Debug, Clone, Deserialize)]
struct RecordDocument {
    class: String,
    #[serde(default)]
    fields: Vec<FieldDocument>,
    #[serde(default)]
    entries: Option<Vec<ObjectId>>,
    #[serde(default)]
    dictionary: Option<Vec<(String, ObjectId)>>,
    #[serde(default)]
    facets: Vec<FacetDocument>,
    #[serde(default)]
    references: ReferenceSet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDocument {
    name: String,
    #[serde(default)]
    declared_by: Option<String>,
    #[serde(default)]
    value: Option<ValueDocument>,
    #[serde(default)]
    record: Option<RecordDocument>,
    #[serde(default)]
    failing: Option<String>,
    #[serde(default)]
    obsolete: Option<String>,
    #[serde(default)]
    indexer: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FacetDocument {
    facet: Facet,
    value: ValueDocument,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ValueDocument {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
    Enum(String, String),
    Handle(u64),
    Point2d([f64; 2]),
    Point3d([f64; 3]),
    Vector2d([f64; 2]),
    Vector3d([f64; 3]),
    Id(ObjectId),
    Ids(Vec<ObjectId>),
    List {
        type_name: String,
        items: Vec<ValueDocument>,
    },
    Dict(Vec<(String, ValueDocument)>),
    TypedValues(Vec<(i16, ValueDocument)>),
}

impl ValueDocument {
    fn into_value(self) -> Value {
        match self {
            ValueDocument::Null => Value::Null,
            ValueDocument::Bool(b) => Value::Bool(b),
            ValueDocument::Int(i) => Value::Int(i),
            ValueDocument::Real(r) => Value::Real(r),
            ValueDocument::Text(s) => Value::Text(s),
            ValueDocument::Enum(type_name, variant) => Value::enumeration(type_name, variant),
            ValueDocument::Handle(h) => Value::Handle(Handle::new(h)),
            ValueDocument::Point2d([x, y]) => Value::Point2d(Point2d::new(x, y)),
            ValueDocument::Point3d([x, y, z]) => Value::Point3d(Point3d::new(x, y, z)),
            ValueDocument::Vector2d([x, y]) => Value::Vector2d(Vector2d::new(x, y)),
            ValueDocument::Vector3d([x, y, z]) => Value::Vector3d(Vector3d::new(x, y, z)),
            ValueDocument::Id(id) => Value::Id(id),
            ValueDocument::Ids(ids) => Value::Ids(ids),
            ValueDocument::List { type_name, items } => Value::list(
                type_name,
                items.into_iter().map(ValueDocument::into_value).collect(),
            ),
            ValueDocument::Dict(entries) => Value::Dict(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into_value()))
                    .collect(),
            ),
            ValueDocument::TypedValues(values) => Value::TypedValues(
                values
                    .into_iter()
                    .map(|(code, value)| TypedValue {
                        code,
                        value: value.into_value(),
                    })
                    .collect(),
            ),
        }
    }
}

impl RecordDocument {
    fn into_builder(self, store: &MemoryStore) -> RecordBuilder {
        let mut builder = store.record(&self.class);
        for field in self.fields {
            let declared_by = field.declared_by.unwrap_or_else(|| self.class.clone());
            builder = if field.indexer {
                builder.indexer(field.name)
            } else if let Some(message) = field.obsolete {
                builder.obsolete(field.name, message)
            } else if let Some(message) = field.failing {
                builder.member(declared_by, field.name, FieldSpec::Failing(message))
            } else if let Some(record) = field.record {
                let nested = record.into_builder(store);
                builder.member(declared_by, field.name, FieldSpec::Record(Box::new(nested)))
            } else {
                let value = field.value.map(ValueDocument::into_value).unwrap_or(Value::Null);
                builder.declared(declared_by, field.name, value)
            };
        }
        if let Some(ids) = self.entries {
            builder = builder.entries(ids);
        }
        for (key, id) in self.dictionary.unwrap_or_default() {
            builder = builder.entry(key, id);
        }
        for facet in self.facets {
            builder = builder.facet(facet.facet, facet.value.into_value());
        }
        builder.set_reference_set(self.references);
        builder
    }
}

impl MemoryStore {
    /// Load a store from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let document: StoreDocument = serde_json::from_str(json)?;
        let mut store = MemoryStore::new();

        for class in document.classes {
            if let Some(parent) = &class.parent {
                store.catalog_mut().define(class.name.clone(), parent.clone());
            }
            if let Some(dxf_name) = &class.dxf_name {
                store.catalog_mut().set_dxf_name(class.name.clone(), dxf_name.clone());
            }
        }
        for record in document.records {
            let builder = record.record.into_builder(&store);
            store.insert_at(record.id, builder);
        }
        for brep in document.breps {
            let builder = brep.record.into_builder(&store);
            store.set_boundary_representation(ObjectId::new(brep.of), builder);
        }
        if let Some(id) = document.named_registry {
            store.set_named_registry(ObjectId::new(id));
        }
        for root in document.roots {
            store.add_root(ObjectId::new(root));
        }
        Ok(store)
    }
}
