use crate::tree::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is not sealed; readonly tree is unavailable")]
    ReadOnlyUnavailable,
    #[error(transparent)]
    Tree(#[from] TreeError),
}

pub type RouterResult<T> = Result<T, RouterError>;
