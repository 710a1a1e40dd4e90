use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pos2D {
    pub x: f64,
    pub y: f64,
}

impl Pos2D {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from `[x, y]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Arity`] if `values` does not hold exactly two numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y] => Ok(Self { x, y }),
            _ => Err(GeometryError::Arity {
                kind: "Pos2D",
                expected: 2,
                actual: values.len(),
            }
            .into()),
        }
    }

    /// Returns `[x, y]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<Pos2D> for Point2 {
    fn from(p: Pos2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl fmt::Display for Pos2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}
