//! Gateway port - the external record store
//!
//! Every read happens inside a read transaction. A transaction is a move-only
//! token: committing consumes it, so nothing can read through it afterwards.

use std::rc::Rc;

use crate::domain::value_objects::ObjectId;

use super::inspectable::Inspectable;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Identity is stale, erased or was never issued
    NotFound(ObjectId),
    /// Read attempted through a transaction that is no longer open
    TransactionClosed,
    /// Store refused to commit
    CommitFailed(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::NotFound(id) => write!(f, "Object not found: {}", id),
            GatewayError::TransactionClosed => write!(f, "Transaction is not open"),
            GatewayError::CommitFailed(msg) => write!(f, "Commit failed: {}", msg),
            GatewayError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// An open read transaction
#[derive(Debug, PartialEq, Eq)]
pub struct Transaction {
    serial: u64,
}

impl Transaction {
    /// Gateways mint transactions; `serial` identifies one within a store
    pub fn new(serial: u64) -> Self {
        Self { serial }
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

/// Abstract record store
///
/// Implementations:
/// - `MemoryStore` - in-memory store loaded from code or JSON fixtures
pub trait Gateway {
    /// Start a read transaction
    fn open_read(&self) -> GatewayResult<Transaction>;

    /// Resolve an identity to its record
    fn resolve(&self, txn: &Transaction, id: ObjectId) -> GatewayResult<Rc<dyn Inspectable>>;

    /// Commit and close a transaction
    fn commit(&self, txn: Transaction) -> GatewayResult<()>;

    /// The named-object registry (root dictionary)
    fn named_registry(&self) -> ObjectId;

    /// Registries the back-reference walk starts from: the named-object
    /// registry and every symbol table
    fn root_registries(&self) -> Vec<ObjectId>;

    /// Build the boundary representation of a solid, region or surface.
    /// The result is a scratch record the caller must dispose.
    fn boundary_representation(
        &self,
        txn: &Transaction,
        id: ObjectId,
    ) -> GatewayResult<Rc<dyn Inspectable>>;
}

/// Run `f` inside one read transaction, committing on success.
///
/// A commit failure is returned even when `f` succeeded.
pub fn in_read_transaction<G, T, E, F>(gateway: &G, f: F) -> Result<T, E>
where
    G: Gateway + ?Sized,
    E: From<GatewayError>,
    F: FnOnce(&Transaction) -> Result<T, E>,
{
    let txn = gateway.open_read()?;
    let result = f(&txn);
    let committed = gateway.commit(txn);
    let value = result?;
    committed?;
    Ok(value)
}
