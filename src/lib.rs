//! dbinspect - reflective object-graph inspector for drawing databases
//!
//! Given any value read from a record store (an identity, a record, a
//! collection), dbinspect builds a navigable hierarchy tree and a property
//! sheet listing every member of the selected value, grouped by declaring
//! type. Reference partitions ("References to", "Referenced by") and
//! type-specific derived views are surfaced as synthetic entries, and any
//! navigable entry can be drilled into as a nested session.
//!
//! The store is reached through the `Gateway` port; `MemoryStore` is the
//! in-memory adapter used by tests and demos.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{render_outline, Inspector, OutlineRow, Session};
pub use config::{ConfigWarning, InspectorConfig};
pub use domain::entities::{NavigableNode, NodePath, PropertyEntry, Value};
pub use domain::ports::{Gateway, GatewayError, Inspectable};
pub use domain::services::ShapeRegistry;
pub use domain::value_objects::{Handle, NumberFormat, ObjectId};
pub use error::{InspectError, InspectResult};
pub use infrastructure::MemoryStore;
pub use logging::init_logging;
