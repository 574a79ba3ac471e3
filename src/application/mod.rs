//! Application Layer
//!
//! Use cases that orchestrate the inspection flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain inspection rules (those are in Domain)
//! - Owns transaction scope and disposal per session
//!
//! ## Use Cases
//!
//! - `Session` - One inspector window: forest, selection, property sheet, drill-in
//! - `outline` - Flattened text projection of a session's tree

pub mod outline;
pub mod session;

pub use outline::{flatten, render_outline, OutlineRow};
pub use session::{Inspector, Session};
