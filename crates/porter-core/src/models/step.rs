//! Copy step model definition and related functionality.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::StepKind;

/// One unit of work in a migration plan.
///
/// Source paths are relative to the source root and the destination is
/// relative to the destination root. Absolute paths are used as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CopyStep {
    /// Short human-readable name shown in reports
    pub label: String,

    /// What the step does
    pub kind: StepKind,

    /// Primary source path (ignored for `ensureDirectory` steps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Alternative sources tried in order when `source` is absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<PathBuf>,

    /// Destination path
    pub destination: PathBuf,
}

impl CopyStep {
    /// Creates a step that makes sure `destination` exists as a directory.
    pub fn ensure_directory(label: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            kind: StepKind::EnsureDirectory,
            source: None,
            fallbacks: Vec::new(),
            destination: destination.into(),
        }
    }

    /// Creates a single-file overwrite step.
    pub fn file(
        label: impl Into<String>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: StepKind::CopyFile,
            source: Some(source.into()),
            fallbacks: Vec::new(),
            destination: destination.into(),
        }
    }

    /// Creates a whole-directory replace step.
    pub fn directory(
        label: impl Into<String>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: StepKind::CopyDirectory,
            source: Some(source.into()),
            fallbacks: Vec::new(),
            destination: destination.into(),
        }
    }

    /// Adds an alternative source, tried after the primary one.
    pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
        self.fallbacks.push(fallback.into());
        self
    }

    /// All candidate sources in lookup order, resolved against `source_root`.
    pub fn candidate_sources(&self, source_root: &Path) -> Vec<PathBuf> {
        self.source
            .iter()
            .chain(self.fallbacks.iter())
            .map(|relative| source_root.join(relative))
            .collect()
    }

    /// The destination resolved against `dest_root`.
    pub fn resolved_destination(&self, dest_root: &Path) -> PathBuf {
        dest_root.join(&self.destination)
    }
}
