use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Vector3;

/// A position on the integer 3D grid with a read-time scale factor.
///
/// A position whose `x` equals [`Pos3D::EMPTY_X`] is the *empty* position:
/// it stands for "no position" and [`Pos3D::coords`] returns `None` for it.
/// `scale_factor` only affects [`Pos3D::scaled_pos`]; the stored
/// coordinates are never rescaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub scale_factor: f64,
}

impl Pos3D {
    /// Sentinel `x` value marking an empty position (`-2^31`).
    pub const EMPTY_X: i32 = i32::MIN;

    /// Creates a position with a scale factor of `1.0`.
    #[must_use]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            x,
            y,
            z,
            scale_factor: 1.0,
        }
    }

    /// Returns the empty position.
    #[must_use]
    pub fn empty_pos() -> Self {
        Self::new(Self::EMPTY_X, 0, 0)
    }

    /// Builds a position from `[x, y, z]`, truncating each value toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Arity`] if `values` does not hold exactly three numbers.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y, z] => Ok(Self::new(x as i32, y as i32, z as i32)),
            _ => Err(GeometryError::Arity {
                kind: "Pos3D",
                expected: 3,
                actual: values.len(),
            }
            .into()),
        }
    }

    /// Returns `[x, y, z]` as floats.
    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [f64::from(self.x), f64::from(self.y), f64::from(self.z)]
    }

    /// Whether this is the empty position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x == Self::EMPTY_X
    }

    /// Returns the coordinates, or `None` for the empty position.
    #[must_use]
    pub fn coords(&self) -> Option<[i32; 3]> {
        if self.is_empty() {
            None
        } else {
            Some([self.x, self.y, self.z])
        }
    }

    /// Returns the coordinates multiplied by the scale factor.
    ///
    /// The empty position scales to the zero vector.
    #[must_use]
    pub fn scaled_pos(&self) -> Vector3 {
        match self.coords() {
            Some([x, y, z]) => {
                Vector3::new(f64::from(x), f64::from(y), f64::from(z)) * self.scale_factor
            }
            None => Vector3::zeros(),
        }
    }

    /// Copies `x`, `y` and `z` from `other`. The scale factor is kept.
    pub fn update_position(&mut self, other: &Pos3D) {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
    }

    /// Resets this position to the empty position. The scale factor is kept.
    pub fn set_empty(&mut self) {
        self.x = Self::EMPTY_X;
        self.y = 0;
        self.z = 0;
    }

    /// Returns the coordinates as a float vector, failing on the empty position.
    pub(crate) fn to_vector(self) -> std::result::Result<Vector3, GeometryError> {
        let [x, y, z] = self.coords().ok_or(GeometryError::EmptyPosition)?;
        Ok(Vector3::new(f64::from(x), f64::from(y), f64::from(z)))
    }
}

impl Default for Pos3D {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for Pos3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("(empty pos3d)")
        } else {
            write!(f, "{}, {}, {}", self.x, self.y, self.z)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_sentinel() {
        let p = Pos3D::empty_pos();
        assert!(p.is_empty());
        assert_eq!(i64::from(p.x), -(1_i64 << 31));
        assert_eq!(p.coords(), None);
        assert!(!Pos3D::new(0, 0, 0).is_empty());
    }

    #[test]
    fn array_round_trip() {
        let p = Pos3D::new(-7, 0, 123_456);
        assert_eq!(Pos3D::from_slice(&p.to_array()).unwrap(), p);
    }

    #[test]
    fn from_slice_truncates_toward_zero() {
        let p = Pos3D::from_slice(&[1.9, -1.9, 0.5]).unwrap();
        assert_eq!(p.coords(), Some([1, -1, 0]));
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(Pos3D::from_slice(&[1.0, 2.0]).is_err());
        assert!(Pos3D::from_slice(&[]).is_err());
    }

    #[test]
    fn scaled_pos_applies_factor() {
        let mut p = Pos3D::new(1, -2, 4);
        p.scale_factor = 0.5;
        let v = p.scaled_pos();
        assert_relative_eq!(v, Vector3::new(0.5, -1.0, 2.0));
        // Stored coordinates are untouched.
        assert_eq!(p.coords(), Some([1, -2, 4]));
    }

    #[test]
    fn scaled_pos_of_empty_is_zero() {
        let mut p = Pos3D::empty_pos();
        p.scale_factor = 3.0;
        assert_relative_eq!(p.scaled_pos(), Vector3::zeros());
    }

    #[test]
    fn update_position_keeps_scale_factor() {
        let mut p = Pos3D::new(1, 1, 1);
        p.scale_factor = 2.0;
        let mut other = Pos3D::new(5, 6, 7);
        other.scale_factor = 9.0;
        p.update_position(&other);
        assert_eq!(p.coords(), Some([5, 6, 7]));
        assert_relative_eq!(p.scale_factor, 2.0);
    }

    #[test]
    fn set_empty_resets_in_place() {
        let mut p = Pos3D::new(5, 6, 7);
        p.set_empty();
        assert!(p.is_empty());
        assert_eq!((p.y, p.z), (0, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Pos3D::new(1, -2, 3).to_string(), "1, -2, 3");
        assert_eq!(Pos3D::empty_pos().to_string(), "(empty pos3d)");
    }
}
