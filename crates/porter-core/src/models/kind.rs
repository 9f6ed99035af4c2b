//! Step kind enumeration.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of copy step kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    /// Create the destination directory if it does not exist
    #[serde(alias = "mkdir")]
    EnsureDirectory,

    /// Copy a single file, overwriting the destination
    #[serde(alias = "file")]
    CopyFile,

    /// Replace the destination directory with a copy of the source tree
    #[serde(alias = "directory", alias = "dir")]
    CopyDirectory,
}

impl StepKind {
    /// Stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::EnsureDirectory => "ensureDirectory",
            StepKind::CopyFile => "copyFile",
            StepKind::CopyDirectory => "copyDirectory",
        }
    }

    /// Whether the step reads anything from the source root.
    pub fn reads_source(&self) -> bool {
        !matches!(self, StepKind::EnsureDirectory)
    }
}
