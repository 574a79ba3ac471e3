//! Property entry entity - one row of the property sheet

use super::value::Value;

/// Group used for class-level entries listed ahead of an identity's members
pub const CLASS_GROUP: &str = "RXClass";

/// A named value in the property sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    /// Member name (or synthetic entry name)
    pub name: String,
    pub value: Value,
    /// Display text of `value`
    pub label: String,
    /// Type that declares the member
    pub group: String,
    /// Whether activating this entry opens a nested session
    pub navigable: bool,
}

impl PropertyEntry {
    pub fn new(
        name: impl Into<String>,
        value: Value,
        label: impl Into<String>,
        group: impl Into<String>,
        navigable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            label: label.into(),
            group: group.into(),
            navigable,
        }
    }

    /// A degraded row: the value is replaced by a message and never navigable
    pub fn degraded(name: impl Into<String>, message: impl Into<String>, group: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            name: name.into(),
            value: Value::Text(message.clone()),
            label: message,
            group: group.into(),
            navigable: false,
        }
    }
}
