//! Error types for document loading and code generation.

use std::io;
use std::path::PathBuf;

use command_syntax_core::{DocumentError, ValidationError};
use thiserror::Error;

/// Why a single specification document could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Content is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON is valid but the document breaks the single-command rule.
    #[error("invalid document: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<DocumentError> for LoadError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Json(err) => Self::Json(err),
            DocumentError::Invalid(err) => Self::Invalid(err),
        }
    }
}

/// Configuration file failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Batch-level failure. Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A document failed to load; carries the offending path.
    #[error("can't extract info from {}: {source}", path.display())]
    Load {
        /// Document path.
        path: PathBuf,
        /// Underlying cause.
        source: LoadError,
    },

    /// No documents matched in the source directory.
    #[error("can't find any {extension} files with commands info in {}", dir.display())]
    EmptyInput {
        /// Directory that was searched.
        dir: PathBuf,
        /// Extension that was looked for.
        extension: String,
    },

    /// The source directory could not be listed.
    #[error("can't read directory {}: {source}", dir.display())]
    Listing {
        /// Directory being listed.
        dir: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The output file could not be created.
    #[error("can't create output file {}: {source}", path.display())]
    CreateOutput {
        /// Requested output path.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },

    /// Writing the generated output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// JSON output could not be written.
    #[error("failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML output could not be written.
    #[error("failed to write YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The extraction thread pool could not be started.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl GenerateError {
    /// Wraps a load failure with the document path.
    pub fn load(path: impl Into<PathBuf>, source: impl Into<LoadError>) -> Self {
        Self::Load {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Convenience alias for results with [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
