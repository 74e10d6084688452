use crate::path::{PathError, PathResult};
use crate::router::RouterOptions;
use crate::types::{PARAM_BEGIN, PARAM_END, SEGMENT_SEPARATOR};

/// Validates the overall shape of a route pattern before it is split.
///
/// The empty pattern and `/` are valid and resolve to zero segments.
#[tracing::instrument(level = "trace", skip(options), fields(pattern_len = pattern.len() as u64))]
pub fn check_route_path(pattern: &str, options: &RouterOptions) -> PathResult<()> {
    if pattern.len() > options.max_pattern_length {
        return Err(PathError::PatternTooLong {
            length: pattern.len(),
            limit: options.max_pattern_length,
        });
    }

    let bytes = pattern.as_bytes();
    let mut param_open: Option<usize> = None;
    let mut segment_start = 0usize;

    for (idx, &byte) in bytes.iter().enumerate() {
        match byte {
            SEGMENT_SEPARATOR => {
                if param_open.is_some() {
                    return Err(PathError::SeparatorInParameter {
                        input: pattern.to_string(),
                        index: idx,
                    });
                }
                check_segment(pattern, &pattern[segment_start..idx])?;
                segment_start = idx + 1;
            }
            PARAM_BEGIN => {
                if param_open.is_some() {
                    return Err(PathError::NestedParameter {
                        input: pattern.to_string(),
                        index: idx,
                    });
                }
                param_open = Some(idx);
            }
            PARAM_END => {
                if param_open.take().is_none() {
                    return Err(PathError::UnbalancedParameter {
                        input: pattern.to_string(),
                        index: idx,
                    });
                }
            }
            b'?' | b'#' => {
                return Err(PathError::DisallowedCharacter {
                    input: pattern.to_string(),
                    character: byte as char,
                });
            }
            b if b <= 0x20 || b == 0x7f => {
                return Err(PathError::ControlOrWhitespace {
                    input: pattern.to_string(),
                    byte,
                });
            }
            _ => {}
        }
    }

    if let Some(index) = param_open {
        return Err(PathError::UnbalancedParameter {
            input: pattern.to_string(),
            index,
        });
    }

    check_segment(pattern, &pattern[segment_start..])
}

fn check_segment(pattern: &str, segment: &str) -> PathResult<()> {
    if segment == "." || segment == ".." {
        return Err(PathError::RelativeSegment {
            input: pattern.to_string(),
            segment: segment.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pattern: &str) -> PathResult<()> {
        check_route_path(pattern, &RouterOptions::default())
    }

    #[test]
    fn accepts_empty_and_root_patterns() {
        assert!(check("").is_ok());
        assert!(check("/").is_ok());
    }

    #[test]
    fn accepts_params_and_catch_all() {
        assert!(check("/users/<id:int(1,9)>/files/*pathInfo").is_ok());
        assert!(check("/archive/<year:int>-<month:int>.html").is_ok());
    }

    #[test]
    fn rejects_whitespace() {
        let err = check("/foo bar").unwrap_err();
        assert_eq!(
            err,
            PathError::ControlOrWhitespace {
                input: "/foo bar".to_string(),
                byte: b' ',
            }
        );
    }

    #[test]
    fn rejects_query_string() {
        match check("/search?q=1").unwrap_err() {
            PathError::DisallowedCharacter { character, .. } => assert_eq!(character, '?'),
            other => panic!("expected DisallowedCharacter, got {other:?}"),
        }
    }

    #[test]
    fn rejects_parent_traversal_segment() {
        match check("/a/../b").unwrap_err() {
            PathError::RelativeSegment { segment, .. } => assert_eq!(segment, ".."),
            other => panic!("expected RelativeSegment, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unclosed_parameter() {
        match check("/users/<id").unwrap_err() {
            PathError::UnbalancedParameter { index, .. } => assert_eq!(index, 7),
            other => panic!("expected UnbalancedParameter, got {other:?}"),
        }
    }

    #[test]
    fn rejects_stray_parameter_end() {
        assert!(matches!(
            check("/users/id>").unwrap_err(),
            PathError::UnbalancedParameter { index: 9, .. }
        ));
    }

    #[test]
    fn rejects_nested_parameter() {
        assert!(matches!(
            check("/<a<b>>").unwrap_err(),
            PathError::NestedParameter { index: 3, .. }
        ));
    }

    #[test]
    fn rejects_separator_inside_parameter() {
        assert!(matches!(
            check("/<a/b>").unwrap_err(),
            PathError::SeparatorInParameter { index: 3, .. }
        ));
    }

    #[test]
    fn rejects_overlong_pattern() {
        let options = RouterOptions::builder()
            .max_pattern_length(4)
            .build()
            .unwrap();
        assert_eq!(
            check_route_path("/abcd", &options).unwrap_err(),
            PathError::PatternTooLong {
                length: 5,
                limit: 4
            }
        );
    }
}
