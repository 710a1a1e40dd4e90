pub mod pos2d;
pub mod pos3d;
pub mod rect2d;
pub mod rect3d;
pub mod size3d;

pub use pos2d::Pos2D;
pub use pos3d::Pos3D;
pub use rect2d::Rect2D;
pub use rect3d::Rect3D;
pub use size3d::Size3D;
