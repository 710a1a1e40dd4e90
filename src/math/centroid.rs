use crate::error::{GeometryError, Result};
use crate::geometry::Pos3D;
use crate::math::Vector3;

/// Returns the centroid of `points`, each axis truncated toward zero.
///
/// The result has the default scale factor; input scale factors are ignored.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyInput`] if `points` is empty, or
/// [`GeometryError::EmptyPosition`] if any point is the empty position.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn centroid(points: &[Pos3D]) -> Result<Pos3D> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput.into());
    }

    let mut sum = Vector3::zeros();
    for p in points {
        sum += p.to_vector()?;
    }
    let mean = sum / points.len() as f64;
    tracing::debug!(count = points.len(), "centroid {:?}", mean);

    Ok(Pos3D::new(mean.x as i32, mean.y as i32, mean.z as i32))
}
