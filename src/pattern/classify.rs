use memchr::memchr;

use crate::tree::NodeType;
use crate::types::{CATCH_ALL_TOKEN, PARAM_BEGIN, PARAM_END};

/// Classifies a raw route segment. Never yields [`NodeType::Root`].
#[inline]
pub fn detect_node_type(segment: &str) -> NodeType {
    if segment == CATCH_ALL_TOKEN {
        return NodeType::CatchAll;
    }

    let bytes = segment.as_bytes();
    match memchr(PARAM_BEGIN, bytes) {
        Some(open) if memchr(PARAM_END, &bytes[open..]).is_some() => NodeType::Param,
        _ => NodeType::Static,
    }
}
