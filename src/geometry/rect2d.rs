use std::fmt;

use crate::error::{GeometryError, Result};

/// An axis-aligned rectangle given by its origin corner and extent.
///
/// `width` and `height` are not required to be non-negative; callers that
/// need meaningful containment results pass normalized rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect2D {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect2D {
    /// Creates a new rectangle.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from `[x, y, width, height]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Arity`] if `values` does not hold exactly four numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(GeometryError::Arity {
                kind: "Rect2D",
                expected: 4,
                actual: values.len(),
            }
            .into()),
        }
    }

    /// Returns `[x, y, width, height]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Returns a copy with every field multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Right edge, `x + width`.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge, `y + height`.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl fmt::Display for Rect2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x={:?}, y={:?}, width={:?}, height={:?})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scale_multiplies_all_fields() {
        let r = Rect2D::new(1.0, 2.0, 3.0, 4.0);
        let s = r.scale(0.5);
        assert_relative_eq!(s.x, 0.5);
        assert_relative_eq!(s.y, 1.0);
        assert_relative_eq!(s.width, 1.5);
        assert_relative_eq!(s.height, 2.0);
        // The source is left untouched.
        assert_eq!(r, Rect2D::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn from_slice_requires_four_values() {
        assert!(Rect2D::from_slice(&[1.0, 2.0, 3.0]).is_err());
        let r = Rect2D::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(r.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn edges_follow_signed_extent() {
        let r = Rect2D::new(10.0, 10.0, -4.0, 2.0);
        assert_relative_eq!(r.right(), 6.0);
        assert_relative_eq!(r.bottom(), 12.0);
    }

    #[test]
    fn display() {
        assert_eq!(
            Rect2D::new(0.0, 1.0, 2.0, 3.5).to_string(),
            "(x=0.0, y=1.0, width=2.0, height=3.5)"
        );
    }
}
