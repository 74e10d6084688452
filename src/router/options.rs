use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::UNBOUNDED_DEPTH;

pub const DEFAULT_MAX_SEGMENTS: usize = 64;
pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 255;
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 2048;

/// Limits applied while compiling route patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub max_segments: usize,
    pub max_segment_length: usize,
    pub max_pattern_length: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        let segment_limit = (UNBOUNDED_DEPTH - 1) as usize;
        if self.max_segments == 0 || self.max_segments > segment_limit {
            return Err(RouterOptionsError::MaxSegmentsOutOfRange {
                provided: self.max_segments,
                max: segment_limit,
            });
        }
        if self.max_segment_length == 0 {
            return Err(RouterOptionsError::MaxSegmentLengthInvalid);
        }
        if self.max_pattern_length == 0 {
            return Err(RouterOptionsError::MaxPatternLengthInvalid);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn max_segments(mut self, value: usize) -> Self {
        self.options.max_segments = value;
        self
    }

    pub fn max_segment_length(mut self, value: usize) -> Self {
        self.options.max_segment_length = value;
        self
    }

    pub fn max_pattern_length(mut self, value: usize) -> Self {
        self.options.max_pattern_length = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_segments must be within 1..={max} (got {provided})")]
    MaxSegmentsOutOfRange { provided: usize, max: usize },
    #[error("max_segment_length must be at least 1")]
    MaxSegmentLengthInvalid,
    #[error("max_pattern_length must be at least 1")]
    MaxPatternLengthInvalid,
}
