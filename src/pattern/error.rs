use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("segment '{segment}' is not a parameter segment")]
    NotAParameter { segment: String },
    #[error("segment '{segment}' opens a parameter that is never closed")]
    UnterminatedParameter { segment: String },
    #[error("parameter name in segment '{segment}' is empty")]
    ParameterNameEmpty { segment: String },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("duplicate parameter name '{name}' in segment '{segment}'")]
    DuplicateParamName { segment: String, name: String },
    #[error("segment '{segment}' places parameters side by side without a literal between them")]
    AdjacentParameters { segment: String },
    #[error("parameter '{name}' in segment '{segment}' has invalid length bounds '{bounds}'")]
    InvalidLengthBounds {
        segment: String,
        name: String,
        bounds: String,
    },
    #[error("parameter '{name}' has invalid validation pattern '{validation}': {error}")]
    InvalidValidation {
        name: String,
        validation: String,
        error: String,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
