//! Domain Services
//!
//! The inspection engine: the shape registry, the oracle and the label
//! formatter at the leaves, the node builder and property enumerator on
//! top of them, plus the disposal tracker and reference walks.

mod back_references;
mod disposal;
mod formatter;
mod node_builder;
mod oracle;
mod properties;
mod registry;

pub use back_references::{referenced_by, references_to};
pub use disposal::DisposalTracker;
pub use formatter::{record_label, value_label, LabelFormatter, NULL_LABEL};
pub use node_builder::{NodeBuilder, NAMED_REGISTRY_NAME};
pub use oracle::{is_navigable, is_navigable_in};
pub use properties::{EnumeratorOptions, PropertyEnumerator};
pub use registry::{
    Capability, ChildShape, LabelFn, Origin, Resolved, ShapeRegistry, SyntheticEntry,
    SyntheticSource,
};
