//! Inspectability oracle - is a value worth drilling into?
//!
//! Pure and total. Collection emptiness is read through `Value::count`,
//! which never consumes anything. Identities are only drillable once they
//! resolve, which needs an open transaction: see `is_navigable_in`.

use crate::domain::entities::{Shape, Value};
use crate::domain::ports::{Gateway, Transaction};

use super::registry::ShapeRegistry;

/// Classify `value` as navigable or terminal.
///
/// Rules, first match wins:
/// 1. null or the null identity: terminal
/// 2. scalars (numbers, text, enums, handles, points, vectors): terminal
/// 3. collections: navigable iff non-empty
/// 4. identity references: navigable (resolution is left to
///    `is_navigable_in`)
/// 5. records: terminal if unrecognized or with empty contents, else the
///    registered override (navigable by default)
pub fn is_navigable(value: &Value, registry: &ShapeRegistry) -> bool {
    match value.shape() {
        Shape::Null | Shape::Scalar => false,
        Shape::Ordered | Shape::Keyed => !value.is_empty_collection(),
        Shape::Reference => true,
        Shape::Composite => {
            let Some(record) = value.as_object() else {
                return false;
            };
            let Some(capability) = registry.resolve(record.as_ref()) else {
                return false;
            };
            if record
                .contents()
                .is_some_and(|contents| contents.is_empty_collection())
            {
                return false;
            }
            capability.navigable.unwrap_or(true)
        }
    }
}

/// Classify `value`, resolving identities through `gateway`.
///
/// A stale identity, or one designating a record of an unregistered type,
/// is terminal.
pub fn is_navigable_in<G: Gateway + ?Sized>(
    gateway: &G,
    txn: &Transaction,
    value: &Value,
    registry: &ShapeRegistry,
) -> bool {
    match value {
        Value::Id(id) if !id.is_null() => gateway
            .resolve(txn, *id)
            .is_ok_and(|record| registry.recognizes(record.as_ref())),
        other => is_navigable(other, registry),
    }
}
