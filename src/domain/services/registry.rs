//! Shape registry - what the engine knows about each record type
//!
//! A type tag maps to a `Capability`. Lookups walk a record's lineage from
//! the most derived type up and merge the registrations field by field, so
//! a derived type only needs to register what it changes.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::ports::{Facet, Inspectable};
use crate::domain::value_objects::NumberFormat;

/// Custom label for a record
pub type LabelFn = fn(&dyn Inspectable, &NumberFormat) -> String;

/// Where a type comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Record type of the store
    Domain,
    /// Wrapper synthesized by the inspector itself
    Engine,
}

/// How a node's children are built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildShape {
    /// No children; members surface through the property sheet only
    Leaf,
    /// One child per entry of the record's `contents()`
    Contents,
    /// A single node for the record held by `member`
    Delegate { member: String },
    /// Self-similar filter tree: children are the records of `nested`,
    /// a filter without `parent` starts expanded
    FilterTree { nested: String, parent: String },
    /// Fixed-depth topology built eagerly, one member per level
    Topology { levels: Vec<String> },
    /// The four reference partitions as group nodes
    ReferenceGroups,
}

/// Where a synthetic property entry gets its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntheticSource {
    Facet(Facet),
    /// Boundary representation built by the gateway from the record's id
    BoundaryRepresentation,
}

/// A derived entry appended after a record's members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticEntry {
    pub name: String,
    pub source: SyntheticSource,
    /// Declaring type, filled in on lookup
    pub group: String,
}

impl SyntheticEntry {
    pub fn facet(name: impl Into<String>, facet: Facet) -> Self {
        Self {
            name: name.into(),
            source: SyntheticSource::Facet(facet),
            group: String::new(),
        }
    }

    pub fn boundary_representation() -> Self {
        Self {
            name: "Boundary representation".to_string(),
            source: SyntheticSource::BoundaryRepresentation,
            group: String::new(),
        }
    }
}

/// What a type registers. Unset fields inherit from base types.
#[derive(Debug, Clone, Default)]
pub struct Capability {
    pub children: Option<ChildShape>,
    /// Member naming tree nodes of this type
    pub title: Option<String>,
    pub label: Option<LabelFn>,
    /// Overrides the oracle's verdict for recognized records
    pub navigable: Option<bool>,
    pub origin: Option<Origin>,
    pub synthetic: Vec<SyntheticEntry>,
    /// Members never listed in the property sheet
    pub hidden: Vec<String>,
}

impl Capability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(mut self, shape: ChildShape) -> Self {
        self.children = Some(shape);
        self
    }

    pub fn title(mut self, member: impl Into<String>) -> Self {
        self.title = Some(member.into());
        self
    }

    pub fn label(mut self, label: LabelFn) -> Self {
        self.label = Some(label);
        self
    }

    pub fn navigable(mut self, navigable: bool) -> Self {
        self.navigable = Some(navigable);
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn synthetic(mut self, entry: SyntheticEntry) -> Self {
        self.synthetic.push(entry);
        self
    }

    pub fn hidden(mut self, member: impl Into<String>) -> Self {
        self.hidden.push(member.into());
        self
    }
}

/// Capability of a concrete record, merged over its lineage
#[derive(Debug, Clone)]
pub struct Resolved {
    pub children: ChildShape,
    pub title: Option<String>,
    pub label: Option<LabelFn>,
    pub navigable: Option<bool>,
    pub origin: Origin,
    /// Base-to-derived order, each tagged with its declaring type
    pub synthetic: Vec<SyntheticEntry>,
    pub hidden: Vec<String>,
}

impl Resolved {
    pub fn hides(&self, member: &str) -> bool {
        self.hidden.iter().any(|hidden| hidden == member)
    }
}

/// Type tag to capability table
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, Capability>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the capability of a type
    pub fn register(&mut self, type_name: impl Into<String>, capability: Capability) {
        let type_name = type_name.into();
        debug!(type_name = %type_name, "registering shape");
        self.shapes.insert(type_name, capability);
    }

    pub fn with(mut self, type_name: impl Into<String>, capability: Capability) -> Self {
        self.register(type_name, capability);
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&Capability> {
        self.shapes.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// True if any type of the lineage is registered
    pub fn recognizes(&self, record: &dyn Inspectable) -> bool {
        record
            .lineage()
            .iter()
            .any(|type_name| self.shapes.contains_key(*type_name))
    }

    /// Merge the registrations along a record's lineage, or `None` for an
    /// unrecognized record
    pub fn resolve(&self, record: &dyn Inspectable) -> Option<Resolved> {
        let lineage = record.lineage();
        let mut registered = lineage
            .iter()
            .filter_map(|type_name| self.shapes.get(*type_name).map(|cap| (*type_name, cap)))
            .peekable();
        registered.peek()?;

        let mut resolved = Resolved {
            children: ChildShape::Leaf,
            title: None,
            label: None,
            navigable: None,
            origin: Origin::Domain,
            synthetic: Vec::new(),
            hidden: Vec::new(),
        };
        let mut children = None;
        let mut origin = None;
        let mut synthetic_levels = Vec::new();

        // Most derived first: the first registration of a field wins
        for (type_name, cap) in registered {
            if children.is_none() {
                children = cap.children.clone();
            }
            if resolved.title.is_none() {
                resolved.title = cap.title.clone();
            }
            if resolved.label.is_none() {
                resolved.label = cap.label;
            }
            if resolved.navigable.is_none() {
                resolved.navigable = cap.navigable;
            }
            if origin.is_none() {
                origin = cap.origin;
            }
            resolved.hidden.extend(cap.hidden.iter().cloned());
            if !cap.synthetic.is_empty() {
                let entries: Vec<SyntheticEntry> = cap
                    .synthetic
                    .iter()
                    .map(|entry| SyntheticEntry {
                        group: type_name.to_string(),
                        ..entry.clone()
                    })
                    .collect();
                synthetic_levels.push(entries);
            }
        }

        resolved.children = children.unwrap_or(ChildShape::Leaf);
        resolved.origin = origin.unwrap_or(Origin::Domain);
        resolved.synthetic = synthetic_levels.into_iter().rev().flatten().collect();
        Some(resolved)
    }

    /// Shapes the inspector knows out of the box
    pub fn standard() -> Self {
        let entry = |name: &str, facet| SyntheticEntry::facet(name, facet);

        Self::new()
            .with("DBObject", Capability::new().children(ChildShape::Leaf))
            .with("SymbolTable", Capability::new().children(ChildShape::Contents))
            .with("SymbolTableRecord", Capability::new().title("Name"))
            .with("DBDictionary", Capability::new().children(ChildShape::Contents))
            .with(
                "BlockTableRecord",
                Capability::new()
                    .synthetic(entry("Entities within block", Facet::BlockMembers))
                    .synthetic(entry(
                        "Block reference Ids (directOnly = true)",
                        Facet::BlockReferences { direct_only: true },
                    ))
                    .synthetic(entry(
                        "Block reference Ids (directOnly = false)",
                        Facet::BlockReferences { direct_only: false },
                    )),
            )
            .with(
                "Spline",
                Capability::new()
                    .synthetic(entry("Control points", Facet::ControlPoints))
                    .synthetic(entry("Fit points", Facet::FitPoints)),
            )
            .with(
                "Polyline",
                Capability::new().synthetic(entry("Vertices", Facet::Vertices)),
            )
            .with(
                "Polyline2d",
                Capability::new().synthetic(entry("Vertices", Facet::Vertices)),
            )
            .with(
                "Polyline3d",
                Capability::new().synthetic(entry("Vertices", Facet::Vertices)),
            )
            .with(
                "Mline",
                Capability::new().synthetic(entry("Vertices", Facet::Vertices)),
            )
            .with(
                "Hatch",
                Capability::new().synthetic(entry("Hatch Loops", Facet::HatchLoops)),
            )
            .with(
                "Layout",
                Capability::new().synthetic(entry("Viewports", Facet::Viewports)),
            )
            .with(
                "Group",
                Capability::new().synthetic(entry("Entities within group", Facet::GroupMembers)),
            )
            .with(
                "Solid3d",
                Capability::new().synthetic(SyntheticEntry::boundary_representation()),
            )
            .with(
                "Region",
                Capability::new().synthetic(SyntheticEntry::boundary_representation()),
            )
            .with(
                "Surface",
                Capability::new().synthetic(SyntheticEntry::boundary_representation()),
            )
            .with(
                "LayerFilterTree",
                Capability::new().children(ChildShape::Delegate {
                    member: "Root".to_string(),
                }),
            )
            .with(
                "LayerFilter",
                Capability::new().title("Name").children(ChildShape::FilterTree {
                    nested: "NestedFilters".to_string(),
                    parent: "Parent".to_string(),
                }),
            )
            .with(
                "Brep",
                Capability::new()
                    .children(ChildShape::Topology {
                        levels: ["Complexes", "Shells", "Faces", "Loops", "Edges"]
                            .iter()
                            .map(|level| level.to_string())
                            .collect(),
                    })
                    .hidden("Surf")
                    .hidden("Solid"),
            )
            .with("BrepEntity", Capability::new().children(ChildShape::Leaf))
            .with("HatchLoop", Capability::new())
            .with(
                "FitData",
                Capability::new().synthetic(entry("FitPoints", Facet::FitPoints)),
            )
            .with(
                "NurbsData",
                Capability::new()
                    .synthetic(entry("ControlPoints", Facet::ControlPoints))
                    .synthetic(entry("Knots", Facet::Knots))
                    .synthetic(entry("Weights", Facet::Weights)),
            )
            .with(
                "DynamicBlockReferenceProperty",
                Capability::new()
                    .title("PropertyName")
                    .hidden("Value")
                    .synthetic(entry("AllowedValues", Facet::AllowedValues)),
            )
            .with(
                "References",
                Capability::new()
                    .children(ChildShape::ReferenceGroups)
                    .origin(Origin::Engine),
            )
    }
}
