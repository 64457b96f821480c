//! Error types for dispatcher generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors that can occur while rendering or writing dispatcher units.
/// Any of them aborts the run and leaves the output directory removed.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("template rendering failed for {ident}: unsubstituted placeholder {{{{{placeholder}}}}}")]
    RenderingFailed { ident: String, placeholder: String },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
