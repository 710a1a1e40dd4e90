use std::fmt;

use crate::error::{GeometryError, Result};

use super::Pos3D;

/// An axis-aligned box spanned by two opposite corners.
///
/// The corners may be given in any order; consumers take per-axis
/// minimum and maximum when they need the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect3D {
    pub p1: Pos3D,
    pub p2: Pos3D,
}

impl Rect3D {
    /// Creates a box from two corners.
    #[must_use]
    pub fn new(p1: Pos3D, p2: Pos3D) -> Self {
        Self { p1, p2 }
    }

    /// Builds a box from `[[x1, y1, z1], [x2, y2, z2]]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Arity`] unless `values` holds exactly two
    /// corners of exactly three numbers each.
    pub fn from_slice<T: AsRef<[f64]>>(values: &[T]) -> Result<Self> {
        match values {
            [c1, c2] => Ok(Self::new(
                Pos3D::from_slice(c1.as_ref())?,
                Pos3D::from_slice(c2.as_ref())?,
            )),
            _ => Err(GeometryError::Arity {
                kind: "Rect3D",
                expected: 2,
                actual: values.len(),
            }
            .into()),
        }
    }

    /// Returns both corners as float arrays.
    #[must_use]
    pub fn to_array(&self) -> [[f64; 3]; 2] {
        [self.p1.to_array(), self.p2.to_array()]
    }

    /// Per-axis `(min, max)` bounds of the box.
    #[must_use]
    pub fn bounds(&self) -> ([i32; 3], [i32; 3]) {
        let (a, b) = (&self.p1, &self.p2);
        (
            [a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)],
            [a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)],
        )
    }
}

impl fmt::Display for Rect3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rect3d(p1={}, p2={})", self.p1, self.p2)
    }
}
