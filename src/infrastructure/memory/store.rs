//! In-memory record store
//!
//! Implements the `Gateway` port over a map of record descriptions.
//! Transactions are tracked so reads through a committed transaction fail
//! the way they would against a live store.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use tracing::debug;

use crate::domain::ports::{Gateway, GatewayError, GatewayResult, Inspectable, Transaction};
use crate::domain::value_objects::{Handle, ObjectId};

use super::catalog::ClassCatalog;
use super::record::{DisposalLog, Lifetime, RecordBuilder};

/// In-memory implementation of the record store
#[derive(Debug)]
pub struct MemoryStore {
    catalog: ClassCatalog,
    records: BTreeMap<ObjectId, RecordBuilder>,
    breps: HashMap<ObjectId, RecordBuilder>,
    named_registry: ObjectId,
    roots: Vec<ObjectId>,
    open: RefCell<HashSet<u64>>,
    next_serial: Cell<u64>,
    commit_failure: RefCell<Option<String>>,
    reads: Cell<usize>,
    log: Rc<DisposalLog>,
}

impl MemoryStore {
    /// Empty store over the standard class hierarchy
    pub fn new() -> Self {
        Self::with_catalog(ClassCatalog::standard())
    }

    pub fn with_catalog(catalog: ClassCatalog) -> Self {
        Self {
            catalog,
            records: BTreeMap::new(),
            breps: HashMap::new(),
            named_registry: ObjectId::NULL,
            roots: Vec::new(),
            open: RefCell::new(HashSet::new()),
            next_serial: Cell::new(1),
            commit_failure: RefCell::new(None),
            reads: Cell::new(0),
            log: Rc::new(DisposalLog::default()),
        }
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ClassCatalog {
        &mut self.catalog
    }

    /// Start describing a record of `class`
    pub fn record(&self, class: &str) -> RecordBuilder {
        RecordBuilder::new(self.catalog.lineage(class)).dxf_name_from(self.catalog.dxf_name(class))
    }

    /// Add a record under the next free id. The handle equals the id.
    pub fn insert(&mut self, record: RecordBuilder) -> ObjectId {
        let raw = self
            .records
            .keys()
            .next_back()
            .map(|id| id.raw() + 1)
            .unwrap_or(1);
        self.insert_at(raw, record)
    }

    /// Add or replace the record at `raw`
    pub fn insert_at(&mut self, raw: u64, record: RecordBuilder) -> ObjectId {
        let id = ObjectId::new(raw);
        self.records.insert(id, record);
        id
    }

    /// Erase a record; its id goes stale
    pub fn erase(&mut self, id: ObjectId) -> bool {
        self.records.remove(&id).is_some()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Set the named-object registry; it is also the first root
    pub fn set_named_registry(&mut self, id: ObjectId) {
        self.named_registry = id;
    }

    /// Add a symbol table to the roots of the reference walk
    pub fn add_root(&mut self, id: ObjectId) {
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    /// Boundary representation returned for `id`
    pub fn set_boundary_representation(&mut self, id: ObjectId, brep: RecordBuilder) {
        self.breps.insert(id, brep);
    }

    /// A scratch record: no id, default handle, owned by whoever reads it
    pub fn transient(&self, record: &RecordBuilder) -> Rc<dyn Inspectable> {
        Rc::new(record.materialize(
            ObjectId::NULL,
            Handle::default(),
            Lifetime::fresh(&self.log),
        ))
    }

    /// Make the next commit fail with `message`
    pub fn fail_next_commit(&self, message: impl Into<String>) {
        *self.commit_failure.borrow_mut() = Some(message.into());
    }

    /// Transactions currently open
    pub fn open_transactions(&self) -> usize {
        self.open.borrow().len()
    }

    /// Number of successful resolves
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn disposal_log(&self) -> &DisposalLog {
        &self.log
    }

    fn check_open(&self, txn: &Transaction) -> GatewayResult<()> {
        if self.open.borrow().contains(&txn.serial()) {
            Ok(())
        } else {
            Err(GatewayError::TransactionClosed)
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway for MemoryStore {
    fn open_read(&self) -> GatewayResult<Transaction> {
        let serial = self.next_serial.get();
        self.next_serial.set(serial + 1);
        self.open.borrow_mut().insert(serial);
        Ok(Transaction::new(serial))
    }

    fn resolve(&self, txn: &Transaction, id: ObjectId) -> GatewayResult<Rc<dyn Inspectable>> {
        self.check_open(txn)?;
        let record = self.records.get(&id).ok_or(GatewayError::NotFound(id))?;
        self.reads.set(self.reads.get() + 1);
        Ok(Rc::new(record.materialize(
            id,
            Handle::new(id.raw()),
            Lifetime::fresh(&self.log),
        )))
    }

    fn commit(&self, txn: Transaction) -> GatewayResult<()> {
        if !self.open.borrow_mut().remove(&txn.serial()) {
            return Err(GatewayError::TransactionClosed);
        }
        if let Some(message) = self.commit_failure.borrow_mut().take() {
            debug!(serial = txn.serial(), "injected commit failure");
            return Err(GatewayError::CommitFailed(message));
        }
        Ok(())
    }

    fn named_registry(&self) -> ObjectId {
        self.named_registry
    }

    fn root_registries(&self) -> Vec<ObjectId> {
        let mut roots = Vec::with_capacity(self.roots.len() + 1);
        if !self.named_registry.is_null() {
            roots.push(self.named_registry);
        }
        roots.extend(self.roots.iter().copied());
        roots
    }

    fn boundary_representation(
        &self,
        txn: &Transaction,
        id: ObjectId,
    ) -> GatewayResult<Rc<dyn Inspectable>> {
        self.check_open(txn)?;
        if !self.records.contains_key(&id) {
            return Err(GatewayError::NotFound(id));
        }
        let brep = self.breps.get(&id).ok_or_else(|| {
            GatewayError::Other(format!("no boundary representation for {}", id))
        })?;
        Ok(self.transient(brep))
    }
}
