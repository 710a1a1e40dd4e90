pub mod centroid;
pub mod containment;
pub mod motion_3d;

pub use centroid::centroid;
pub use containment::{point_in_rect_3d, rect_contains_2d};
pub use motion_3d::{distance, move_time_seconds, position_at_time};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;
