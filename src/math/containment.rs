use crate::geometry::{Pos3D, Rect2D, Rect3D};

/// Returns `true` if `inner` lies within or on the boundary of `outer`.
///
/// Edges are taken as `x`, `x + width`, `y` and `y + height` without
/// normalizing negative extents.
#[must_use]
pub fn rect_contains_2d(inner: &Rect2D, outer: &Rect2D) -> bool {
    outer.x <= inner.x
        && outer.right() >= inner.right()
        && outer.y <= inner.y
        && outer.bottom() >= inner.bottom()
}

/// Returns `true` if `point` lies inside or on the box spanned by `rect`.
///
/// An empty point, or a box with an empty corner, contains nothing.
#[must_use]
pub fn point_in_rect_3d(point: &Pos3D, rect: &Rect3D) -> bool {
    let Some(p) = point.coords() else {
        return false;
    };
    if rect.p1.is_empty() || rect.p2.is_empty() {
        return false;
    }

    let (min, max) = rect.bounds();
    (0..3).all(|axis| min[axis] <= p[axis] && p[axis] <= max[axis])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Rect3D {
        Rect3D::new(Pos3D::new(0, 0, 0), Pos3D::new(5, 5, 5))
    }

    // ── rect_contains_2d tests ──

    #[test]
    fn rect_contains_itself() {
        let r = Rect2D::new(1.0, 2.0, 3.0, 4.0);
        assert!(rect_contains_2d(&r, &r));
    }

    #[test]
    fn rect_strictly_inside() {
        let outer = Rect2D::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect2D::new(2.0, 2.0, 3.0, 3.0);
        assert!(rect_contains_2d(&inner, &outer));
        assert!(!rect_contains_2d(&outer, &inner));
    }

    #[test]
    fn rect_touching_edges_is_contained() {
        let outer = Rect2D::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect2D::new(0.0, 5.0, 10.0, 5.0);
        assert!(rect_contains_2d(&inner, &outer));
    }

    #[test]
    fn rect_overlapping_is_not_contained() {
        let outer = Rect2D::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect2D::new(8.0, 8.0, 3.0, 1.0);
        assert!(!rect_contains_2d(&inner, &outer));
    }

    #[test]
    fn negative_extent_is_compared_as_is() {
        // Right edge of inner is 9 - 4 = 5, so every inequality holds.
        let outer = Rect2D::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect2D::new(9.0, 1.0, -4.0, 1.0);
        assert!(rect_contains_2d(&inner, &outer));
    }

    // ── point_in_rect_3d tests ──

    #[test]
    fn point_inside_box() {
        assert!(point_in_rect_3d(&Pos3D::new(3, 3, 3), &cube()));
    }

    #[test]
    fn point_outside_box() {
        assert!(!point_in_rect_3d(&Pos3D::new(6, 3, 3), &cube()));
        assert!(!point_in_rect_3d(&Pos3D::new(3, -1, 3), &cube()));
        assert!(!point_in_rect_3d(&Pos3D::new(3, 3, 6), &cube()));
    }

    #[test]
    fn point_on_boundary_is_inside() {
        assert!(point_in_rect_3d(&Pos3D::new(0, 5, 0), &cube()));
    }

    #[test]
    fn corner_order_does_not_matter() {
        let flipped = Rect3D::new(Pos3D::new(5, 0, 5), Pos3D::new(0, 5, 0));
        assert!(point_in_rect_3d(&Pos3D::new(1, 4, 2), &flipped));
    }

    #[test]
    fn empty_positions_are_never_inside() {
        assert!(!point_in_rect_3d(&Pos3D::empty_pos(), &cube()));
        let open = Rect3D::new(Pos3D::empty_pos(), Pos3D::new(5, 5, 5));
        assert!(!point_in_rect_3d(&Pos3D::new(0, 0, 0), &open));
    }
}
