//! Error types for the descriptor model.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by descriptor validation, both the structural checks
/// run before generation and the per-argument syntactic checks run by
/// generated dispatchers.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("command {ident}: name must not be empty")]
    EmptyName { ident: String },

    #[error("command {ident}: required argument '{arg}' at position {position} follows an optional argument")]
    RequiredAfterOptional {
        ident: String,
        arg: String,
        position: usize,
    },

    #[error("command {ident}: at most one optional argument is allowed, '{arg}' is the second")]
    TooManyOptional { ident: String, arg: String },

    #[error("command {ident}: path argument '{arg}' allows {max_segments} segments, supported range is 2..=6")]
    PathArityOutOfRange {
        ident: String,
        arg: String,
        max_segments: u8,
    },

    #[error("invalid value for argument {position}: {message}")]
    InvalidArgument { position: usize, message: String },
}
