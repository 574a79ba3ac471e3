//! Session use case
//!
//! One inspector window: the hierarchy forest, the current selection and
//! its property sheet. Every read happens inside one gateway transaction
//! per user action. Scratch records produced while listing properties are
//! tracked and disposed exactly once, when the session closes.

use tracing::{debug, info};

use crate::application::outline::{flatten, OutlineRow};
use crate::domain::entities::{node_at, node_at_mut, NavigableNode, NodePath, PropertyEntry, Value};
use crate::domain::ports::{in_read_transaction, Gateway, Transaction};
use crate::domain::services::{DisposalTracker, NodeBuilder, PropertyEnumerator};
use crate::error::{InspectError, InspectResult};

use super::inspector::Inspector;

/// Navigation state of one inspector window
///
/// Drilling into a property opens a nested session over the same gateway
/// with its own tracker; closing either never disposes the other's records.
#[derive(Debug)]
pub struct Session<'a, G: Gateway + ?Sized> {
    gateway: &'a G,
    inspector: &'a Inspector,
    root: Value,
    forest: Vec<NavigableNode>,
    selected: Option<NodePath>,
    properties: Vec<PropertyEntry>,
    tracker: DisposalTracker,
    depth: usize,
    closed: bool,
}

impl<'a, G: Gateway + ?Sized> Session<'a, G> {
    /// Open a top-level session on `root`
    ///
    /// Builds the forest and lists the properties of the first node in one
    /// transaction. A failed commit fails the whole open.
    pub fn open(gateway: &'a G, inspector: &'a Inspector, root: Value) -> InspectResult<Self> {
        Self::open_at_depth(gateway, inspector, root, 0)
    }

    fn open_at_depth(
        gateway: &'a G,
        inspector: &'a Inspector,
        root: Value,
        depth: usize,
    ) -> InspectResult<Self> {
        let mut session = Self {
            gateway,
            inspector,
            root,
            forest: Vec::new(),
            selected: None,
            properties: Vec::new(),
            tracker: DisposalTracker::new(),
            depth,
            closed: false,
        };
        // On error the half-built session drops and flushes its tracker.
        session.populate()?;
        info!(
            depth,
            roots = session.forest.len(),
            properties = session.properties.len(),
            "opened inspector session"
        );
        Ok(session)
    }

    fn populate(&mut self) -> InspectResult<()> {
        let gateway = self.gateway;
        let inspector = self.inspector;
        let root = &self.root;
        let tracker = &mut self.tracker;

        let (forest, properties) = in_read_transaction(gateway, |txn: &Transaction| {
            let builder = NodeBuilder::new(gateway, &inspector.registry, inspector.format);
            let forest = builder.build_forest(txn, root);
            let properties = match forest.first() {
                Some(first) => Self::enumerator(gateway, inspector).list(txn, &first.value, tracker),
                None => Vec::new(),
            };
            Ok::<_, InspectError>((forest, properties))
        })?;

        self.selected = if forest.is_empty() {
            None
        } else {
            Some(NodePath::root(0))
        };
        self.forest = forest;
        self.properties = properties;
        Ok(())
    }

    fn enumerator(gateway: &'a G, inspector: &'a Inspector) -> PropertyEnumerator<'a, G> {
        PropertyEnumerator::new(
            gateway,
            &inspector.registry,
            inspector.format,
            &inspector.options,
        )
    }

    fn ensure_open(&self) -> InspectResult<()> {
        if self.closed {
            return Err(InspectError::SessionClosed);
        }
        Ok(())
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn forest(&self) -> &[NavigableNode] {
        &self.forest
    }

    /// Property sheet of the selected node
    pub fn properties(&self) -> &[PropertyEntry] {
        &self.properties
    }

    /// First property with the given name
    pub fn property(&self, name: &str) -> Option<&PropertyEntry> {
        self.properties.iter().find(|entry| entry.name == name)
    }

    pub fn selected(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    pub fn node(&self, path: &NodePath) -> Option<&NavigableNode> {
        node_at(&self.forest, path)
    }

    /// Visible rows of the tree, parents before children
    pub fn outline(&self) -> Vec<OutlineRow> {
        flatten(&self.forest)
    }

    /// Nesting level: 0 for the top-level session
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Scratch records waiting for disposal
    pub fn pending_disposals(&self) -> usize {
        self.tracker.len()
    }

    /// Select the node at `path` and replace the property sheet with its
    /// entries. Scratch records of the previous sheet stay tracked.
    pub fn on_selection_changed(&mut self, path: &NodePath) -> InspectResult<&[PropertyEntry]> {
        self.ensure_open()?;
        let value = self
            .node(path)
            .map(|node| node.value.clone())
            .ok_or_else(|| InspectError::NodeNotFound {
                path: path.to_string(),
            })?;

        let gateway = self.gateway;
        let inspector = self.inspector;
        let tracker = &mut self.tracker;
        let properties = in_read_transaction(gateway, |txn: &Transaction| {
            Ok::<_, InspectError>(Self::enumerator(gateway, inspector).list(txn, &value, tracker))
        })?;

        if let Some(previous) = self.selected.take() {
            if let Some(node) = node_at_mut(&mut self.forest, &previous) {
                node.selected = false;
            }
        }
        if let Some(node) = node_at_mut(&mut self.forest, path) {
            node.selected = true;
        }
        self.selected = Some(path.clone());
        self.properties = properties;
        debug!(path = %path, entries = self.properties.len(), "selection changed");
        Ok(&self.properties)
    }

    /// Expand the node at `path`, building its children on first use
    pub fn expand(&mut self, path: &NodePath) -> InspectResult<&NavigableNode> {
        self.ensure_open()?;
        let gateway = self.gateway;
        let inspector = self.inspector;
        let node = node_at_mut(&mut self.forest, path).ok_or_else(|| InspectError::NodeNotFound {
            path: path.to_string(),
        })?;

        if !node.is_built() {
            in_read_transaction(gateway, |txn: &Transaction| {
                NodeBuilder::new(gateway, &inspector.registry, inspector.format).expand(txn, &mut *node);
                Ok::<_, InspectError>(())
            })?;
        }
        node.expanded = true;
        Ok(&*node)
    }

    /// Collapse the node at `path`; built children are kept
    pub fn collapse(&mut self, path: &NodePath) -> InspectResult<()> {
        self.ensure_open()?;
        let node = node_at_mut(&mut self.forest, path).ok_or_else(|| InspectError::NodeNotFound {
            path: path.to_string(),
        })?;
        node.expanded = false;
        Ok(())
    }

    /// Drill into a navigable property: open a nested session rooted at its
    /// value
    ///
    /// The nested session borrows this one, so it closes first: scratch
    /// records it shows stay alive until then.
    ///
    /// ```compile_fail
    /// # use dbinspect::{Inspector, MemoryStore, Session, Value};
    /// # let store = MemoryStore::new();
    /// # let inspector = Inspector::default();
    /// let mut outer = Session::open(&store, &inspector, Value::Null).unwrap();
    /// let entry = outer.properties()[0].clone();
    /// let inner = outer.on_property_activated(&entry).unwrap();
    /// outer.on_close();
    /// drop(inner);
    /// ```
    pub fn on_property_activated<'s>(
        &'s self,
        entry: &PropertyEntry,
    ) -> InspectResult<Session<'s, G>> {
        self.ensure_open()?;
        if !entry.navigable {
            return Err(InspectError::NotNavigable {
                name: entry.name.clone(),
            });
        }
        info!(property = %entry.name, depth = self.depth + 1, "drilling into property");
        Session::open_at_depth(self.gateway, self.inspector, entry.value.clone(), self.depth + 1)
    }

    /// Close the window, disposing every tracked scratch record.
    /// Returns how many were disposed; closing twice disposes nothing.
    pub fn on_close(&mut self) -> usize {
        if self.closed {
            return 0;
        }
        self.closed = true;
        let disposed = self.tracker.flush();
        info!(depth = self.depth, disposed, "closed inspector session");
        disposed
    }
}

impl<G: Gateway + ?Sized> Drop for Session<'_, G> {
    fn drop(&mut self) {
        if !self.closed {
            self.on_close();
        }
    }
}
