pub mod git;
pub mod members;
pub mod numeric;
pub mod path;
pub mod stopwatch;

pub use git::GitInfo;
pub use members::members_to_string;
pub use numeric::{ceil_to_decimal_place, cumulative_mean};
pub use path::to_absolute_path;
pub use stopwatch::Stopwatch;
