//! Common test utilities for dbinspect contract and scenario tests.
//!
//! This module provides:
//! - Fixtures: a small drawing store built in code and one loaded from JSON
//! - Helpers to find entries and nodes by name

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use dbinspect::{NavigableNode, PropertyEntry};

/// First entry named `name`, panicking with the available names otherwise
pub fn entry<'e>(entries: &'e [PropertyEntry], name: &str) -> &'e PropertyEntry {
    entries.iter().find(|e| e.name == name).unwrap_or_else(|| {
        panic!(
            "no entry named {:?}; have {:?}",
            name,
            entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>()
        )
    })
}

/// Entry named `name` declared by `group`
pub fn entry_in<'e>(entries: &'e [PropertyEntry], group: &str, name: &str) -> &'e PropertyEntry {
    entries
        .iter()
        .find(|e| e.group == group && e.name == name)
        .unwrap_or_else(|| panic!("no entry {}.{}", group, name))
}

pub fn entry_names(entries: &[PropertyEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

pub fn node_names(nodes: &[NavigableNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.name.as_str()).collect()
}
