//! Error types for the migrator library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for all migration operations.
///
/// A missing source path is never an error: it is reported as a skipped step
/// (see [`crate::models::StepOutcome`]). Everything here is a real fault.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Directory copy whose source and destination alias or nest
    #[error("Refusing to copy '{source_path}' onto overlapping destination '{destination}'")]
    Overlap {
        source_path: PathBuf,
        destination: PathBuf,
    },
    /// FIFO, socket or device node, which cannot be copied as bytes
    #[error("Cannot copy special file '{path}'")]
    SpecialFile { path: PathBuf },
    /// Configuration file could not be read or understood
    #[error("Configuration error in '{path}': {message}")]
    Config { path: PathBuf, message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Blocking task could not be joined
    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> MigrateError {
        MigrateError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl MigrateError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error for the given file.
    pub fn config(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Short machine-friendly classification used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileSystem { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => "permission-denied",
                std::io::ErrorKind::NotFound => "not-found",
                std::io::ErrorKind::AlreadyExists => "already-exists",
                _ => "io",
            },
            Self::Overlap { .. } => "overlap",
            Self::SpecialFile { .. } => "special-file",
            Self::Config { .. } => "config",
            Self::Serialization { .. } => "serialization",
            Self::InvalidInput { .. } => "invalid-input",
            Self::Runtime { .. } => "runtime",
        }
    }
}

/// Extension trait attaching the offending path to `std::io` results.
pub trait IoResultExt<T> {
    /// Map an I/O error into [`MigrateError::FileSystem`] at `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| MigrateError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for migration operations
pub type Result<T> = std::result::Result<T, MigrateError>;
