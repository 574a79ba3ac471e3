//! Label formatter - short, deterministic display text for any value
//!
//! Text depends only on the value and the number format, never on
//! navigation state. Identities are resolved through the caller's open
//! read transaction.

use tracing::warn;

use crate::domain::entities::Value;
use crate::domain::ports::{Gateway, Inspectable, Transaction};
use crate::domain::value_objects::NumberFormat;

use super::registry::{Origin, ShapeRegistry};

/// Label of the null value and of unresolvable identities
pub const NULL_LABEL: &str = "(Null)";

/// Formats labels of values read through one gateway
pub struct LabelFormatter<'a, G: Gateway + ?Sized> {
    gateway: &'a G,
    registry: &'a ShapeRegistry,
    format: NumberFormat,
}

impl<'a, G: Gateway + ?Sized> LabelFormatter<'a, G> {
    pub fn new(gateway: &'a G, registry: &'a ShapeRegistry, format: NumberFormat) -> Self {
        Self {
            gateway,
            registry,
            format,
        }
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    pub fn label(&self, txn: &Transaction, value: &Value) -> String {
        match value {
            Value::Id(id) if id.is_null() => NULL_LABEL.to_string(),
            Value::Id(id) => match self.gateway.resolve(txn, *id) {
                Ok(record) => format!("< {} {} >", record.type_name(), record.handle()),
                Err(err) => {
                    warn!(id = %id, error = %err, "could not resolve identity for label");
                    NULL_LABEL.to_string()
                }
            },
            Value::Object(record) => record_label(record.as_ref(), self.registry, &self.format),
            other => value_label(other, &self.format),
        }
    }
}

/// Label of a record held by value
pub fn record_label(
    record: &dyn Inspectable,
    registry: &ShapeRegistry,
    format: &NumberFormat,
) -> String {
    let resolved = registry.resolve(record);
    if let Some(label) = resolved.as_ref().and_then(|r| r.label) {
        return label(record, format);
    }
    match resolved.map(|r| r.origin) {
        Some(Origin::Engine) => format!("< Inspector.{} >", record.type_name()),
        _ if record.is_persistent() => {
            format!("< {} {} >", record.type_name(), record.handle())
        }
        _ => format!("< {} >", record.type_name()),
    }
}

/// Label of any value that needs neither the gateway nor the registry.
///
/// Identities and records get a bracketed type-only fallback here; use
/// `LabelFormatter::label` to resolve them.
pub fn value_label(value: &Value, format: &NumberFormat) -> String {
    match value {
        Value::Null => NULL_LABEL.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Real(r) => format.real(*r),
        Value::Text(s) => s.clone(),
        Value::Enum { variant, .. } => variant.clone(),
        Value::Handle(h) => h.to_string(),
        Value::Point2d(p) => format.point2d(p),
        Value::Point3d(p) => format.point3d(p),
        Value::Vector2d(v) => format.vector2d(v),
        Value::Vector3d(v) => format.vector3d(v),
        Value::Id(id) if id.is_null() => NULL_LABEL.to_string(),
        Value::Id(_) => "< ObjectId >".to_string(),
        Value::Ids(_) => "< ObjectIdCollection >".to_string(),
        Value::List(collection) => format!("< {} >", collection.type_name),
        Value::Dict(_) => "< Dictionary >".to_string(),
        Value::TypedValues(_) => "< ResultBuffer >".to_string(),
        Value::Object(record) => format!("< {} >", record.type_name()),
    }
}
