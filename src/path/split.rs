use memchr::memchr_iter;
use smallvec::SmallVec;

use crate::path::{PathError, PathResult};
use crate::router::RouterOptions;
use crate::types::SEGMENT_SEPARATOR;

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Splits a checked route pattern into its segments.
///
/// One leading and one trailing separator are ignored; any other empty segment is an error.
pub fn split_route_path<'a>(
    pattern: &'a str,
    options: &RouterOptions,
) -> PathResult<Segments<'a>> {
    tracing::event!(tracing::Level::TRACE, operation = "split_route_path", pattern = %pattern);

    let body = pattern.strip_prefix('/').unwrap_or(pattern);
    let body = body.strip_suffix('/').unwrap_or(body);

    let mut segments = Segments::new();
    if body.is_empty() {
        return Ok(segments);
    }

    let mut start = 0usize;
    for end in memchr_iter(SEGMENT_SEPARATOR, body.as_bytes()).chain(std::iter::once(body.len())) {
        let segment = &body[start..end];
        if segment.is_empty() {
            return Err(PathError::EmptySegment {
                input: pattern.to_string(),
                position: segments.len() + 1,
            });
        }
        if segment.len() > options.max_segment_length {
            return Err(PathError::SegmentTooLong {
                input: pattern.to_string(),
                segment: segment.to_string(),
                length: segment.len(),
                limit: options.max_segment_length,
            });
        }
        segments.push(segment);
        start = end + 1;
    }

    if segments.len() > options.max_segments {
        return Err(PathError::TooManySegments {
            input: pattern.to_string(),
            count: segments.len(),
            limit: options.max_segments,
        });
    }

    Ok(segments)
}
