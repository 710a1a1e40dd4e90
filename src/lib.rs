pub mod error;
pub mod geometry;
pub mod log;
pub mod math;
pub mod util;

pub use error::{PvvError, Result};
