use crate::path::PathError;
use crate::pattern::PatternError;
use crate::types::Depth;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("invalid route segment '{path}': the wildcard marker is reserved for '*pathInfo'")]
    WildcardMisuse { path: String },
    #[error(
        "invalid route '{pattern}': the '*pathInfo' segment must be the last segment of the route, e.g. '/shell/*pathInfo'"
    )]
    CatchAllNotTerminal { pattern: String },
    #[error("duplicate handler binding in route tree at path '{path}', depth {depth}")]
    DuplicateRoute { path: String, depth: Depth },
    #[error("merge candidate node is missing")]
    MissingCandidate,
}

impl TreeError {
    /// True for failures raised by pattern syntax rather than tree structure.
    pub fn is_syntax(&self) -> bool {
        matches!(self, TreeError::Path(_) | TreeError::Pattern(_))
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
