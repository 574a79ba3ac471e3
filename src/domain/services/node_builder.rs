//! Node builder - turns a root value into the hierarchy forest
//!
//! Dispatch is by the registered `ChildShape` of a record, falling back on
//! the value's own shape for collections. Children are built lazily on
//! first expansion, except topology, which is materialized in one pass:
//! its records are torn down together with their scratch owner, so nothing
//! may be read from them later.

use tracing::{debug, warn};

use crate::domain::entities::{walk_mut, NavigableNode, ReferenceKind, Value};
use crate::domain::ports::{Gateway, Inspectable, Transaction};
use crate::domain::value_objects::{NumberFormat, ObjectId};

use super::formatter::{value_label, LabelFormatter, NULL_LABEL};
use super::oracle::is_navigable;
use super::registry::{ChildShape, ShapeRegistry};

/// Name of the named-object registry node
pub const NAMED_REGISTRY_NAME: &str = "Named Objects Dictionary";

/// How an identity node gets its name
#[derive(Debug, Clone, Copy)]
enum Naming<'k> {
    /// Title member of the record, else `< Type >`
    Title,
    /// Dictionary key
    Key(&'k str),
    /// Full label, `< Type HANDLE >`
    Label,
}

/// Builds tree nodes for values read through one gateway
pub struct NodeBuilder<'a, G: Gateway + ?Sized> {
    gateway: &'a G,
    registry: &'a ShapeRegistry,
    formatter: LabelFormatter<'a, G>,
}

impl<'a, G: Gateway + ?Sized> NodeBuilder<'a, G> {
    pub fn new(gateway: &'a G, registry: &'a ShapeRegistry, format: NumberFormat) -> Self {
        Self {
            gateway,
            registry,
            formatter: LabelFormatter::new(gateway, registry, format),
        }
    }

    /// Build the forest for `root`. The first node is selected and every
    /// expanded node has its children built.
    pub fn build_forest(&self, txn: &Transaction, root: &Value) -> Vec<NavigableNode> {
        let mut forest = match root {
            Value::Ids(ids) => ids
                .iter()
                .map(|id| self.id_node(txn, *id, Naming::Label, ObjectId::NULL))
                .collect(),
            Value::List(collection) => collection
                .items
                .iter()
                .map(|item| self.item_node(txn, item))
                .collect(),
            Value::Object(record) => self.record_forest(txn, root, record.as_ref()),
            _ => vec![self.single(txn, root)],
        };

        if let Some(first) = forest.first_mut() {
            first.selected = true;
        }
        self.build_expanded(txn, &mut forest);
        debug!(roots = forest.len(), "built forest");
        forest
    }

    /// Children of a node holding `value`, in source order
    pub fn build_children(&self, txn: &Transaction, value: &Value) -> Vec<NavigableNode> {
        let children = match value {
            Value::Id(id) if !id.is_null() => match self.gateway.resolve(txn, *id) {
                Ok(record) => self.record_children(txn, record.as_ref()),
                Err(err) => {
                    warn!(id = %id, error = %err, "cannot expand stale identity");
                    Vec::new()
                }
            },
            Value::Object(record) => self.record_children(txn, record.as_ref()),
            Value::Ids(ids) => ids
                .iter()
                .map(|id| self.id_node(txn, *id, Naming::Label, ObjectId::NULL))
                .collect(),
            Value::List(collection) => collection
                .items
                .iter()
                .map(|item| self.item_node(txn, item))
                .collect(),
            _ => Vec::new(),
        };
        debug!(count = children.len(), "built children");
        children
    }

    /// Build the children of `node` if it has none yet
    pub fn expand(&self, txn: &Transaction, node: &mut NavigableNode) {
        if node.is_built() {
            return;
        }
        let children = if node.navigable {
            self.build_children(txn, &node.value)
        } else {
            Vec::new()
        };
        node.set_children(children);
    }

    /// Make sure every expanded node in `forest` has built children
    pub fn build_expanded(&self, txn: &Transaction, forest: &mut [NavigableNode]) {
        walk_mut(forest, &mut |node| {
            if node.expanded {
                self.expand(txn, node);
            }
        });
    }

    fn record_forest(
        &self,
        txn: &Transaction,
        root: &Value,
        record: &dyn Inspectable,
    ) -> Vec<NavigableNode> {
        let Some(resolved) = self.registry.resolve(record) else {
            return vec![self.single(txn, root)];
        };
        match &resolved.children {
            ChildShape::Delegate { member } => match record.get(member) {
                Ok(value) => vec![self.item_node(txn, &value).expanded(true)],
                Err(err) => vec![NavigableNode::terminal(err.to_string(), Value::Null)],
            },
            ChildShape::FilterTree { nested, .. } => self.member_nodes(txn, record, nested),
            ChildShape::Topology { levels } => {
                vec![self.topology_node(txn, root, levels).expanded(true)]
            }
            ChildShape::ReferenceGroups => {
                let mut groups = self.reference_groups(txn, record);
                if let Some(first) = groups.first_mut() {
                    first.selected = true;
                    first.expanded = true;
                }
                groups
            }
            ChildShape::Contents | ChildShape::Leaf => vec![self.single(txn, root)],
        }
    }

    /// The root value as one selected, expanded node
    fn single(&self, txn: &Transaction, value: &Value) -> NavigableNode {
        self.item_node(txn, value).expanded(true)
    }

    fn record_children(&self, txn: &Transaction, record: &dyn Inspectable) -> Vec<NavigableNode> {
        let Some(resolved) = self.registry.resolve(record) else {
            return Vec::new();
        };
        match &resolved.children {
            ChildShape::Leaf => Vec::new(),
            ChildShape::Contents => self.contents_nodes(txn, record),
            ChildShape::Delegate { member } => match record.get(member) {
                Ok(value) => vec![self.item_node(txn, &value)],
                Err(_) => Vec::new(),
            },
            ChildShape::FilterTree { nested, .. } => self.member_nodes(txn, record, nested),
            ChildShape::Topology { levels } => self.topology_children(txn, record, levels),
            ChildShape::ReferenceGroups => self.reference_groups(txn, record),
        }
    }

    /// One node per entry of a symbol table or dictionary
    fn contents_nodes(&self, txn: &Transaction, record: &dyn Inspectable) -> Vec<NavigableNode> {
        let parent = record.object_id();
        match record.contents() {
            Some(Value::Ids(ids)) => ids
                .iter()
                .map(|id| self.id_node(txn, *id, Naming::Title, parent))
                .collect(),
            Some(Value::Dict(entries)) => entries
                .iter()
                .map(|(key, value)| match value {
                    Value::Id(id) => self.id_node(txn, *id, Naming::Key(key), parent),
                    other => NavigableNode::terminal(key.clone(), other.clone()),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// One node per record held by a collection-valued member
    fn member_nodes(
        &self,
        txn: &Transaction,
        record: &dyn Inspectable,
        member: &str,
    ) -> Vec<NavigableNode> {
        match record.get(member) {
            Ok(Value::List(collection)) => collection
                .items
                .iter()
                .map(|item| self.item_node(txn, item))
                .collect(),
            Ok(Value::Ids(ids)) => ids
                .iter()
                .map(|id| self.id_node(txn, *id, Naming::Title, record.object_id()))
                .collect(),
            Ok(_) => Vec::new(),
            Err(err) => {
                warn!(member, error = %err, "cannot read child member");
                Vec::new()
            }
        }
    }

    fn topology_node(&self, txn: &Transaction, value: &Value, levels: &[String]) -> NavigableNode {
        let name = self.formatter.label(txn, value);
        let children = match value.as_object() {
            Some(record) => self.topology_children(txn, record.as_ref(), levels),
            None => Vec::new(),
        };
        NavigableNode::with_children(name, value.clone(), children)
    }

    /// Every remaining topology level, built now
    fn topology_children(
        &self,
        txn: &Transaction,
        record: &dyn Inspectable,
        levels: &[String],
    ) -> Vec<NavigableNode> {
        let Some((level, rest)) = levels.split_first() else {
            return Vec::new();
        };
        match record.get(level) {
            Ok(Value::List(collection)) => collection
                .items
                .iter()
                .map(|item| self.topology_node(txn, item, rest))
                .collect(),
            Ok(_) => Vec::new(),
            Err(err) => {
                warn!(level = %level, error = %err, "cannot read topology level");
                Vec::new()
            }
        }
    }

    /// The four reference partitions, each with its identities built
    fn reference_groups(&self, txn: &Transaction, record: &dyn Inspectable) -> Vec<NavigableNode> {
        ReferenceKind::ALL
            .iter()
            .map(|kind| {
                let value = record.get(kind.member_name()).unwrap_or(Value::Ids(Vec::new()));
                let children = match &value {
                    Value::Ids(ids) => ids
                        .iter()
                        .map(|id| self.id_node(txn, *id, Naming::Label, ObjectId::NULL))
                        .collect(),
                    _ => Vec::new(),
                };
                let navigable = is_navigable(&value, self.registry);
                let mut group = NavigableNode::with_children(kind.display_name(), value, children);
                group.navigable = navigable;
                group
            })
            .collect()
    }

    /// Node for any value appearing as an element
    fn item_node(&self, txn: &Transaction, value: &Value) -> NavigableNode {
        match value {
            Value::Id(id) => self.id_node(txn, *id, Naming::Title, ObjectId::NULL),
            Value::Object(record) => self.record_node(txn, value, record.as_ref()),
            other => {
                let name = value_label(other, self.formatter.format());
                let mut node = NavigableNode::new(name, other.clone());
                node.navigable = is_navigable(other, self.registry);
                node
            }
        }
    }

    fn record_node(&self, txn: &Transaction, value: &Value, record: &dyn Inspectable) -> NavigableNode {
        let resolved = self.registry.resolve(record);
        let title = resolved
            .as_ref()
            .and_then(|r| r.title.as_deref())
            .and_then(|member| record.get(member).ok())
            .map(|title| value_label(&title, self.formatter.format()));
        let name = title.unwrap_or_else(|| self.formatter.label(txn, value));

        let mut node = NavigableNode::new(name, value.clone());
        node.navigable = is_navigable(value, self.registry);
        if let Some(ChildShape::FilterTree { parent, .. }) = resolved.as_ref().map(|r| &r.children) {
            let orphan = matches!(record.get(parent), Ok(Value::Null) | Err(_));
            node.expanded = orphan;
        }
        node
    }

    /// Node for an identity. Stale ids become `(Null)` leaves; an id equal
    /// to `parent` is shown but not drillable.
    fn id_node(&self, txn: &Transaction, id: ObjectId, naming: Naming<'_>, parent: ObjectId) -> NavigableNode {
        let value = Value::Id(id);
        if id.is_null() {
            return NavigableNode::terminal(NULL_LABEL, value);
        }
        let record = match self.gateway.resolve(txn, id) {
            Ok(record) => record,
            Err(err) => {
                warn!(id = %id, error = %err, "stale identity in tree");
                return NavigableNode::terminal(NULL_LABEL, value);
            }
        };

        let mut node = NavigableNode::new(self.id_name(record.as_ref(), naming), value);
        if !self.registry.recognizes(record.as_ref()) {
            debug!(id = %id, class = record.type_name(), "unregistered type in tree");
            node.navigable = false;
            node.set_children(Vec::new());
            return node;
        }
        if id == self.gateway.named_registry() {
            node.name = NAMED_REGISTRY_NAME.to_string();
            node.expanded = true;
        }
        if !parent.is_null() && id == parent {
            node.navigable = false;
            node.expanded = false;
            node.set_children(Vec::new());
        }
        node
    }

    fn id_name(&self, record: &dyn Inspectable, naming: Naming<'_>) -> String {
        match naming {
            Naming::Key(key) => key.to_string(),
            Naming::Label => format!("< {} {} >", record.type_name(), record.handle()),
            Naming::Title => self
                .registry
                .resolve(record)
                .and_then(|r| r.title)
                .and_then(|member| record.get(&member).ok())
                .map(|title| value_label(&title, self.formatter.format()))
                .unwrap_or_else(|| format!("< {} >", record.type_name())),
        }
    }
}
