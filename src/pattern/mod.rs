mod classify;
mod error;
mod option;
mod params;

pub use classify::detect_node_type;
pub use error::{PatternError, PatternResult};
pub use option::RouteOption;
pub use params::{Params, parse_param_options};
