mod error;
mod split;
mod syntax;

pub use error::{PathError, PathResult};
pub use split::{Segments, split_route_path};
pub use syntax::check_route_path;
