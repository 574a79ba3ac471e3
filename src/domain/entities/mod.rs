//! Domain Entities
//!
//! - `Value` - anything the inspector can show
//! - `NavigableNode` - one row of the hierarchy tree
//! - `PropertyEntry` - one row of the property sheet
//! - `ReferenceSet` / `References` - reference partitions of a record

mod node;
mod property;
mod references;
mod value;

pub use node::{node_at, node_at_mut, walk_mut, NavigableNode, NodePath};
pub use property::{PropertyEntry, CLASS_GROUP};
pub use references::{ReferenceDirection, ReferenceKind, ReferenceSet, References};
pub use value::{Collection, Shape, TypedValue, Value};
