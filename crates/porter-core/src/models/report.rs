//! Migration report model.

use std::path::PathBuf;

use jiff::Timestamp;
use serde::Serialize;

use super::StepReport;
use crate::error::Result;

/// Everything a caller needs to judge a migration run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    /// Source root the plan was resolved against
    pub source_root: PathBuf,

    /// Destination root the plan was resolved against
    pub dest_root: PathBuf,

    /// Whether the run only inspected paths
    pub dry_run: bool,

    /// Timestamp when the run started (UTC)
    pub started_at: Timestamp,

    /// Timestamp when the run stopped (UTC)
    pub finished_at: Timestamp,

    /// Attempted steps in execution order
    pub steps: Vec<StepReport>,

    /// Number of plan steps never attempted because an earlier one failed
    pub not_attempted: usize,
}

impl MigrationReport {
    /// Number of steps that copied (or would copy) their source.
    pub fn copied_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_copied()).count()
    }

    /// Number of steps skipped because of a missing source.
    pub fn skipped_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_skipped()).count()
    }

    /// Number of failed steps (zero or one, the run stops on the first).
    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_failure()).count()
    }

    /// Whether the run was cut short by a failure.
    pub fn aborted(&self) -> bool {
        self.failed_count() > 0
    }

    /// True when every step was attempted and none failed.
    pub fn is_success(&self) -> bool {
        !self.aborted() && self.not_attempted == 0
    }

    /// Encode the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
