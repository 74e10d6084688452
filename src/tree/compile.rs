use memchr::memchr;

use super::{NodeType, RouteNode, TreeError, TreeResult};
use crate::path::{PathError, check_route_path, split_route_path};
use crate::pattern::{detect_node_type, parse_param_options};
use crate::router::RouterOptions;
use crate::types::{Depth, UNBOUNDED_DEPTH, WILDCARD_MARKER};

/// Compiles one route pattern into a linear chain of nodes, one per segment.
///
/// The handler is bound to the last node. Returns `Ok(None)` when the pattern
/// has no segments, e.g. `""` or `"/"`.
pub fn compile_route<H>(
    pattern: &str,
    handler: H,
    options: &RouterOptions,
) -> TreeResult<Option<RouteNode<H>>> {
    tracing::event!(tracing::Level::TRACE, operation = "compile_route", pattern = %pattern);

    check_route_path(pattern, options)?;
    let segments = split_route_path(pattern, options)?;
    let Some((last, init)) = segments.split_last() else {
        return Ok(None);
    };

    let length = Depth::try_from(segments.len())
        .ok()
        .filter(|len| *len < UNBOUNDED_DEPTH)
        .ok_or_else(|| PathError::TooManySegments {
            input: pattern.to_string(),
            count: segments.len(),
            limit: (UNBOUNDED_DEPTH - 1) as usize,
        })?;
    let unbounded = detect_node_type(last) == NodeType::CatchAll;
    let depth_budget = |cur_depth: Depth| {
        if unbounded {
            UNBOUNDED_DEPTH
        } else {
            length - cur_depth + 1
        }
    };

    let mut parents = Vec::with_capacity(init.len());
    for (cur_depth, segment) in (1..length).zip(init.iter()) {
        parents.push(build_node(segment, cur_depth, depth_budget(cur_depth))?);
    }
    let mut tail = build_node(last, length, depth_budget(length))?;
    tail.handler = Some(handler);

    // each node becomes the only child of its predecessor
    let chain = parents.into_iter().rev().fold(tail, |child, mut parent| {
        parent.children.push(child);
        parent
    });
    validate_chain(&chain, pattern)?;

    Ok(Some(chain))
}

fn build_node<H>(segment: &str, cur_depth: Depth, max_depth: Depth) -> TreeResult<RouteNode<H>> {
    let mut node = RouteNode::new(
        detect_node_type(segment),
        segment.to_string(),
        cur_depth,
        max_depth,
    );
    if node.node_type == NodeType::Param {
        let (param_path, params) = parse_param_options(segment)?;
        node.param_path = param_path;
        node.params = params;
    }
    Ok(node)
}

fn validate_chain<H>(chain: &RouteNode<H>, pattern: &str) -> TreeResult<()> {
    let mut current = Some(chain);

    while let Some(node) = current {
        let is_catch_all = node.node_type == NodeType::CatchAll;
        if !is_catch_all && memchr(WILDCARD_MARKER, node.path.as_bytes()).is_some() {
            return Err(TreeError::WildcardMisuse {
                path: node.path.clone(),
            });
        }
        if is_catch_all && node.has_children() {
            return Err(TreeError::CatchAllNotTerminal {
                pattern: pattern.to_string(),
            });
        }
        current = node.children.first();
    }

    Ok(())
}
