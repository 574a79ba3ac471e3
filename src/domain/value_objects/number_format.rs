//! Number format value object
//!
//! Derived from the host-wide display precision (the number of decimal
//! places shown for linear units). Passed explicitly to the label formatter
//! instead of being read from ambient host state.

use serde::{Deserialize, Serialize};

use super::geometry::{Point2d, Point3d, Vector2d, Vector3d};

/// Largest precision the host accepts
pub const MAX_PRECISION: u8 = 8;

/// Host default (LUPREC)
pub const DEFAULT_PRECISION: u8 = 4;

/// Fixed-point format for real numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberFormat {
    precision: u8,
}

impl NumberFormat {
    /// Create a format with `precision` decimal places (clamped to `MAX_PRECISION`)
    pub fn new(precision: u8) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
        }
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Format pattern in the host's notation: `0` for precision 0,
    /// `0.0000` for precision 4.
    pub fn pattern(&self) -> String {
        if self.precision == 0 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(self.precision as usize))
        }
    }

    pub fn real(&self, value: f64) -> String {
        format!("{:.*}", self.precision as usize, value)
    }

    pub fn point2d(&self, p: &Point2d) -> String {
        format!("({},{})", self.real(p.x), self.real(p.y))
    }

    pub fn point3d(&self, p: &Point3d) -> String {
        format!("({},{},{})", self.real(p.x), self.real(p.y), self.real(p.z))
    }

    pub fn vector2d(&self, v: &Vector2d) -> String {
        format!("({},{})", self.real(v.x), self.real(v.y))
    }

    pub fn vector3d(&self, v: &Vector3d) -> String {
        format!("({},{},{})", self.real(v.x), self.real(v.y), self.real(v.z))
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
