//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `memory/` - In-memory record store (fixtures, tests, demos)

pub mod memory;

// Re-export for convenience
pub use memory::{ClassCatalog, MemoryStore, RecordBuilder};
