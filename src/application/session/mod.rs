//! Session Use Case
//!
//! - `Inspector` - Shared engine setup (registry, number format, walk options)
//! - `Session` - Navigation state of one inspector window

mod inspector;
mod use_case;

pub use inspector::Inspector;
pub use use_case::Session;
