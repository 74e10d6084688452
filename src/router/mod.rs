mod errors;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_MAX_PATTERN_LENGTH, DEFAULT_MAX_SEGMENT_LENGTH, DEFAULT_MAX_SEGMENTS, RouterOptions,
    RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
