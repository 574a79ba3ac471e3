//! In-memory gateway
//!
//! - `MemoryStore` - record store implementing the `Gateway` port
//! - `RecordBuilder` - describes records, built in code or from JSON
//! - `ClassCatalog` - the store's class hierarchy

mod catalog;
mod document;
mod record;
mod store;

pub use catalog::ClassCatalog;
pub use record::{DisposalLog, FieldSpec, RecordBuilder, StoredRecord};
pub use store::MemoryStore;
