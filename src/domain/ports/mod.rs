//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod gateway;
pub mod inspectable;
pub mod reference_writer;

pub use gateway::{in_read_transaction, Gateway, GatewayError, GatewayResult, Transaction};
pub use inspectable::{Facet, FieldError, Inspectable, Member, MemberKind};
pub use reference_writer::ReferenceWriter;
