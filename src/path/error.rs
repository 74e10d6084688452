use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("route pattern '{input}' contains control or whitespace byte {byte}")]
    ControlOrWhitespace { input: String, byte: u8 },
    #[error("route pattern '{input}' contains disallowed character '{character}'")]
    DisallowedCharacter { input: String, character: char },
    #[error("route pattern '{input}' contains relative segment '{segment}'")]
    RelativeSegment { input: String, segment: String },
    #[error("route pattern '{input}' has an unbalanced parameter marker at index {index}")]
    UnbalancedParameter { input: String, index: usize },
    #[error("route pattern '{input}' nests a parameter marker at index {index}")]
    NestedParameter { input: String, index: usize },
    #[error("route pattern '{input}' has a separator inside a parameter at index {index}")]
    SeparatorInParameter { input: String, index: usize },
    #[error("route pattern '{input}' has an empty segment at position {position}")]
    EmptySegment { input: String, position: usize },
    #[error("route pattern '{input}' has {count} segments (limit {limit})")]
    TooManySegments {
        input: String,
        count: usize,
        limit: usize,
    },
    #[error("segment '{segment}' in '{input}' is {length} bytes long (limit {limit})")]
    SegmentTooLong {
        input: String,
        segment: String,
        length: usize,
        limit: usize,
    },
    #[error("route pattern is {length} bytes long (limit {limit})")]
    PatternTooLong { length: usize, limit: usize },
}

pub type PathResult<T> = Result<T, PathError>;
