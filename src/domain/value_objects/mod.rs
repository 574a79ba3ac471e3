//! Domain Value Objects
//!
//! Immutable value types that represent store concepts: identities,
//! geometry scalars and the display number format.

mod config_warning;
mod geometry;
mod identity;
mod number_format;

pub use config_warning::ConfigWarning;
pub use geometry::{Point2d, Point3d, Vector2d, Vector3d};
pub use identity::{Handle, ObjectId};
pub use number_format::{NumberFormat, DEFAULT_PRECISION, MAX_PRECISION};
