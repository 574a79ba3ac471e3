//! Domain Layer
//!
//! The inspection engine, free of any concrete store.
//!
//! ## Structure
//!
//! - `entities/` - Values, tree nodes, property entries, reference sets
//! - `value_objects/` - Identities, geometry scalars, number format
//! - `services/` - Registry, oracle, formatter, builders, disposal
//! - `ports/` - The gateway and the reflection interface records implement
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Records are only reached through the `Gateway` port
//! 2. **One transaction per call** - Every read happens inside an open read transaction
//! 3. **Registry over switches** - Type-specific behavior is registered, not hard-coded

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
