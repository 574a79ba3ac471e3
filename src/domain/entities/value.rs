//! Value entity - anything the inspector can show
//!
//! Values come from the gateway (record members, contents, facets) or are
//! derived by the engine (reference partitions, boundary representations).
//! Composite records are held behind `Rc<dyn Inspectable>`; everything
//! else is plain data.

use std::fmt;
use std::rc::Rc;

use crate::domain::ports::Inspectable;
use crate::domain::value_objects::{Handle, ObjectId, Point2d, Point3d, Vector2d, Vector3d};

/// Broad shape of a value, used by the oracle and the builders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `Value::Null` or the null identity
    Null,
    /// Numbers, text, enums, handles, points and vectors
    Scalar,
    /// A non-null identity reference
    Reference,
    /// Ordered collection (`Ids`, `List`, `TypedValues`)
    Ordered,
    /// Keyed collection (`Dict`)
    Keyed,
    /// Composite record
    Composite,
}

/// Named ordered collection (e.g. `Point3dCollection`, `DoubleCollection`)
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub type_name: String,
    pub items: Vec<Value>,
}

impl Collection {
    pub fn new(type_name: impl Into<String>, items: Vec<Value>) -> Self {
        Self {
            type_name: type_name.into(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// One entry of an extended-data buffer: a group code and its value
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub code: i16,
    pub value: Value,
}

/// Any value the inspector can display
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
    Enum { type_name: String, variant: String },
    Handle(Handle),
    Point2d(Point2d),
    Point3d(Point3d),
    Vector2d(Vector2d),
    Vector3d(Vector3d),
    Id(ObjectId),
    Ids(Vec<ObjectId>),
    List(Collection),
    Dict(Vec<(String, Value)>),
    TypedValues(Vec<TypedValue>),
    Object(Rc<dyn Inspectable>),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn enumeration(type_name: impl Into<String>, variant: impl Into<String>) -> Self {
        Value::Enum {
            type_name: type_name.into(),
            variant: variant.into(),
        }
    }

    pub fn list(type_name: impl Into<String>, items: Vec<Value>) -> Self {
        Value::List(Collection::new(type_name, items))
    }

    pub fn object<T: Inspectable + 'static>(record: T) -> Self {
        Value::Object(Rc::new(record))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Value::Null => Shape::Null,
            Value::Id(id) if id.is_null() => Shape::Null,
            Value::Id(_) => Shape::Reference,
            Value::Bool(_)
            | Value::Int(_)
            | Value::Real(_)
            | Value::Text(_)
            | Value::Enum { .. }
            | Value::Handle(_)
            | Value::Point2d(_)
            | Value::Point3d(_)
            | Value::Vector2d(_)
            | Value::Vector3d(_) => Shape::Scalar,
            Value::Ids(_) | Value::List(_) | Value::TypedValues(_) => Shape::Ordered,
            Value::Dict(_) => Shape::Keyed,
            Value::Object(_) => Shape::Composite,
        }
    }

    /// Number of elements for collection-shaped values, `None` otherwise.
    ///
    /// Never consumes anything: asking twice gives the same answer.
    pub fn count(&self) -> Option<usize> {
        match self {
            Value::Ids(ids) => Some(ids.len()),
            Value::List(collection) => Some(collection.len()),
            Value::Dict(entries) => Some(entries.len()),
            Value::TypedValues(values) => Some(values.len()),
            _ => None,
        }
    }

    /// True for collection-shaped values with no element
    pub fn is_empty_collection(&self) -> bool {
        self.count() == Some(0)
    }

    pub fn as_id(&self) -> Option<ObjectId> {
        match self {
            Value::Id(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<dyn Inspectable>> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True if this value designates `record` itself: its own identity, or
    /// the very same (or an equally persistent) record instance.
    pub fn designates(&self, record: &Rc<dyn Inspectable>) -> bool {
        match self {
            Value::Id(id) => !id.is_null() && *id == record.object_id(),
            Value::Object(other) => {
                Rc::ptr_eq(other, record)
                    || (other.is_persistent()
                        && other.handle() == record.handle()
                        && other.type_name() == record.type_name())
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Int(i) => write!(f, "Int({})", i),
            Value::Real(r) => write!(f, "Real({})", r),
            Value::Text(s) => write!(f, "Text({:?})", s),
            Value::Enum { type_name, variant } => write!(f, "Enum({}::{})", type_name, variant),
            Value::Handle(h) => write!(f, "Handle({})", h),
            Value::Point2d(p) => write!(f, "{:?}", p),
            Value::Point3d(p) => write!(f, "{:?}", p),
            Value::Vector2d(v) => write!(f, "{:?}", v),
            Value::Vector3d(v) => write!(f, "{:?}", v),
            Value::Id(id) => write!(f, "Id{}", id),
            Value::Ids(ids) => f.debug_tuple("Ids").field(ids).finish(),
            Value::List(c) => f.debug_tuple("List").field(c).finish(),
            Value::Dict(entries) => f.debug_tuple("Dict").field(entries).finish(),
            Value::TypedValues(values) => f.debug_tuple("TypedValues").field(values).finish(),
            Value::Object(record) => write!(
                f,
                "Object({} {})",
                record.type_name(),
                record.handle()
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (
                Value::Enum {
                    type_name: ta,
                    variant: va,
                },
                Value::Enum {
                    type_name: tb,
                    variant: vb,
                },
            ) => ta == tb && va == vb,
            (Value::Handle(a), Value::Handle(b)) => a == b,
            (Value::Point2d(a), Value::Point2d(b)) => a == b,
            (Value::Point3d(a), Value::Point3d(b)) => a == b,
            (Value::Vector2d(a), Value::Vector2d(b)) => a == b,
            (Value::Vector3d(a), Value::Vector3d(b)) => a == b,
            (Value::Id(a), Value::Id(b)) => a == b,
            (Value::Ids(a), Value::Ids(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::TypedValues(a), Value::TypedValues(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Id(id)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
