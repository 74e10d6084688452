/// Position of a node within its chain (1-based) or the reachable depth below it.
pub type Depth = u16;

/// Sentinel depth for chains ending in a catch-all. Never incremented or compared arithmetically.
pub const UNBOUNDED_DEPTH: Depth = Depth::MAX;

pub const CATCH_ALL_TOKEN: &str = "*pathInfo";
pub const WILDCARD_MARKER: u8 = b'*';
pub const PARAM_BEGIN: u8 = b'<';
pub const PARAM_END: u8 = b'>';
pub const SEGMENT_SEPARATOR: u8 = b'/';
