//! Per-step outcome types.

use std::path::PathBuf;

use serde::Serialize;

use super::CopyStep;

/// What happened when a single step was attempted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum StepOutcome {
    /// Source found and copied to the destination
    Copied { from: PathBuf },

    /// Destination directory was created
    Created,

    /// Destination directory already existed
    AlreadyPresent,

    /// No candidate source existed; destination left untouched
    Skipped { missing: Vec<PathBuf> },

    /// Dry run: source found, nothing written
    WouldCopy { from: PathBuf },

    /// Dry run: destination directory missing, not created
    WouldCreate,

    /// An I/O fault or refused overlap stopped the step
    Failed { kind: String, error: String },
}

impl StepOutcome {
    /// Whether the step ended in a fault.
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }

    /// Whether the step was skipped because its source was missing.
    pub fn is_skipped(&self) -> bool {
        matches!(self, StepOutcome::Skipped { .. })
    }

    /// Whether the step wrote (or in a dry run, would write) to the destination.
    pub fn is_copied(&self) -> bool {
        matches!(self, StepOutcome::Copied { .. } | StepOutcome::WouldCopy { .. })
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Copied` / `✓ Created` / `✓ Present`
    /// - `○ Would copy` / `○ Would create` for dry runs
    /// - `⚠ Skipped` when the source is missing
    /// - `✗ Failed` on faults
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepOutcome::Copied { .. } => "✓ Copied",
            StepOutcome::Created => "✓ Created",
            StepOutcome::AlreadyPresent => "✓ Present",
            StepOutcome::WouldCopy { .. } => "○ Would copy",
            StepOutcome::WouldCreate => "○ Would create",
            StepOutcome::Skipped { .. } => "⚠ Skipped",
            StepOutcome::Failed { .. } => "✗ Failed",
        }
    }
}

/// A step paired with its outcome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub step: CopyStep,
    /// Destination resolved against the destination root
    pub destination: PathBuf,
    pub outcome: StepOutcome,
}
