use crate::error::{GeometryError, Result};
use crate::geometry::Pos3D;

/// Euclidean distance between two non-empty positions, as a float.
fn exact_distance(a: &Pos3D, b: &Pos3D) -> Result<f64> {
    Ok((b.to_vector()? - a.to_vector()?).norm())
}

/// Returns the Euclidean distance between `a` and `b`, truncated toward zero.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPosition`]
/// if either position is empty.
#[allow(clippy::cast_possible_truncation)]
pub fn distance(a: &Pos3D, b: &Pos3D) -> Result<i64> {
    Ok(exact_distance(a, b)?.trunc() as i64)
}

/// Returns the time in seconds needed to travel from `a` to `b` at `velocity`.
///
/// A zero `velocity` yields `inf` (or `NaN` when `a == b`).
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPosition`]
/// if either position is empty.
pub fn move_time_seconds(a: &Pos3D, b: &Pos3D, velocity: f64) -> Result<f64> {
    Ok(exact_distance(a, b)? / velocity)
}

/// Returns the position reached after moving from `src` toward `target` at
/// `velocity` for `elapsed_seconds`.
///
/// Once the covered distance reaches the total distance the result is
/// `target` itself. Intermediate coordinates are truncated toward zero and
/// keep the scale factor of `src`.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPosition`] if either position is empty, or
/// [`GeometryError::NonFiniteMotion`] if `velocity * elapsed_seconds` is not
/// a finite distance short of the target.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn position_at_time(
    src: &Pos3D,
    target: &Pos3D,
    velocity: f64,
    elapsed_seconds: f64,
) -> Result<Pos3D> {
    let from = src.to_vector()?;
    let to = target.to_vector()?;
    let total = (to - from).norm();
    let covered = velocity * elapsed_seconds;

    // Arrival is checked first, so coincident points also land here.
    if covered >= total {
        return Ok(*target);
    }
    if total == 0.0 {
        return Ok(*src);
    }

    let ratio = covered / total;
    if !ratio.is_finite() {
        return Err(GeometryError::NonFiniteMotion {
            velocity,
            elapsed_seconds,
        }
        .into());
    }
    let p = from + (to - from) * ratio;
    tracing::trace!(ratio, "interpolated position {:?}", p);

    Ok(Pos3D {
        x: p.x as i32,
        y: p.y as i32,
        z: p.z as i32,
        scale_factor: src.scale_factor,
    })
}
