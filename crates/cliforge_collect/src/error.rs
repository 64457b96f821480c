//! Error types for command discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for collector operations.
pub type CollectResult<T> = Result<T, CollectError>;

/// Errors that can occur while discovering command declarations.
/// All of them are fatal; the run aborts on the first one.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("{path}: no command declaration found, expected one per file")]
    NoCommandDeclaration { path: PathBuf },

    #[error("{path}: {count} top-level declarations found, expected exactly one")]
    MultipleDeclarations { path: PathBuf, count: usize },

    #[error("{path}: identifier '{ident}' must start with an upper-case letter so generated code can reference it")]
    UnexportedIdentifier { path: PathBuf, ident: String },

    #[error("{path}: identifier '{ident}' contains characters not usable as a generated module name")]
    InvalidIdentifier { path: PathBuf, ident: String },

    #[error("{path}: identifier '{ident}' is already declared elsewhere")]
    DuplicateIdentifier { path: PathBuf, ident: String },

    #[error("{path}: invalid command declaration: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
