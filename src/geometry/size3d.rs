use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Vector3;

/// Extent of a box along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size3D {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Size3D {
    #[must_use]
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Builds a size from `[width, height, depth]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Arity`] if `values` does not hold exactly three numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [width, height, depth] => Ok(Self::new(width, height, depth)),
            _ => Err(GeometryError::Arity {
                kind: "Size3D",
                expected: 3,
                actual: values.len(),
            }
            .into()),
        }
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }
}

impl From<Size3D> for Vector3 {
    fn from(s: Size3D) -> Self {
        Vector3::new(s.width, s.height, s.depth)
    }
}

impl fmt::Display for Size3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.width, self.height, self.depth)
    }
}
