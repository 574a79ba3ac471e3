//! Navigable node entity - one row of the hierarchy tree
//!
//! Children are built on first expansion, except for shapes whose backing
//! data does not outlive the build (topology), which arrive fully built.

use std::fmt;

use super::value::Value;

/// Position of a node in a forest: one child index per level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the `index`-th root of the forest
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// Path of the `index`-th child of this node
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

/// A tree node wrapping an inspected value
#[derive(Debug, Clone)]
pub struct NavigableNode {
    /// Display name
    pub name: String,
    /// The wrapped value
    pub value: Value,
    pub expanded: bool,
    pub selected: bool,
    /// False for nodes shown but not drillable (stale ids, self references)
    pub navigable: bool,
    children: Option<Vec<NavigableNode>>,
}

impl NavigableNode {
    /// A node whose children will be built on first expansion
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            expanded: false,
            selected: false,
            navigable: true,
            children: None,
        }
    }

    /// A terminal node: shown, never expanded into anything
    pub fn terminal(name: impl Into<String>, value: Value) -> Self {
        Self {
            navigable: false,
            children: Some(Vec::new()),
            ..Self::new(name, value)
        }
    }

    /// A node built eagerly with its full subtree
    pub fn with_children(name: impl Into<String>, value: Value, children: Vec<NavigableNode>) -> Self {
        Self {
            children: Some(children),
            ..Self::new(name, value)
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// True once children have been computed
    pub fn is_built(&self) -> bool {
        self.children.is_some()
    }

    /// Built children; empty while the node has never been expanded
    pub fn children(&self) -> &[NavigableNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn children_mut(&mut self) -> &mut [NavigableNode] {
        self.children.as_deref_mut().unwrap_or(&mut [])
    }

    /// Install children computed on first expansion. Ignored once built.
    pub fn set_children(&mut self, children: Vec<NavigableNode>) {
        if self.children.is_none() {
            self.children = Some(children);
        }
    }
}

/// Find a node by path
pub fn node_at<'a>(forest: &'a [NavigableNode], path: &NodePath) -> Option<&'a NavigableNode> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = forest.get(*first)?;
    for index in rest {
        node = node.children().get(*index)?;
    }
    Some(node)
}

/// Find a node by path (mutable)
pub fn node_at_mut<'a>(
    forest: &'a mut [NavigableNode],
    path: &NodePath,
) -> Option<&'a mut NavigableNode> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = forest.get_mut(*first)?;
    for index in rest {
        node = node.children_mut().get_mut(*index)?;
    }
    Some(node)
}

/// Visit every built node depth-first, parents before children
pub fn walk_mut(forest: &mut [NavigableNode], visit: &mut dyn FnMut(&mut NavigableNode)) {
    for node in forest {
        visit(node);
        walk_mut(node.children_mut(), visit);
    }
}
