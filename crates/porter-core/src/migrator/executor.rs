//! Step execution and report collection for the Migrator.

use jiff::Timestamp;
use log::{error, info, warn};
use tokio::task;

use super::Migrator;
use crate::{
    error::{MigrateError, Result},
    fs_ops,
    models::{CopyStep, MigrationReport, StepKind, StepOutcome, StepReport},
};

impl Migrator {
    /// Run the whole plan on a blocking worker thread.
    ///
    /// Steps still execute one after another; this only keeps the caller's
    /// runtime free while files are copied.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::Runtime` if the worker thread panics. Step
    /// faults do not surface here, they are recorded in the report.
    pub async fn run(&self) -> Result<MigrationReport> {
        let migrator = self.clone();
        task::spawn_blocking(move || migrator.run_blocking())
            .await
            .map_err(|e| MigrateError::Runtime {
                message: format!("Task join error: {e}"),
            })
    }

    /// Run the whole plan on the current thread.
    ///
    /// Every step is attempted in order until one fails; missing sources do
    /// not count as failures.
    pub fn run_blocking(&self) -> MigrationReport {
        info!(
            "Migration starting: {} -> {}{}",
            self.source_root.display(),
            self.dest_root.display(),
            if self.dry_run { " (dry run)" } else { "" }
        );

        let started_at = Timestamp::now();
        let mut steps = Vec::with_capacity(self.plan.len());
        let mut not_attempted = 0;

        for (index, step) in self.plan.iter().enumerate() {
            let report = self.execute_step(step);
            let failed = report.outcome.is_failure();
            steps.push(report);
            if failed {
                not_attempted = self.plan.len() - index - 1;
                error!(
                    "Step '{}' failed, {} remaining step(s) not attempted",
                    step.label, not_attempted
                );
                break;
            }
        }

        let report = MigrationReport {
            source_root: self.source_root.clone(),
            dest_root: self.dest_root.clone(),
            dry_run: self.dry_run,
            started_at,
            finished_at: Timestamp::now(),
            steps,
            not_attempted,
        };
        info!(
            "Migration finished: {} copied, {} skipped, {} failed",
            report.copied_count(),
            report.skipped_count(),
            report.failed_count()
        );
        report
    }

    /// Execute a single step and classify its result.
    pub fn execute_step(&self, step: &CopyStep) -> StepReport {
        let destination = step.resolved_destination(&self.dest_root);
        let outcome = match self.attempt(step) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("{}: {e}", step.label);
                StepOutcome::Failed {
                    kind: e.kind().to_string(),
                    error: e.to_string(),
                }
            }
        };
        StepReport {
            step: step.clone(),
            destination,
            outcome,
        }
    }

    fn attempt(&self, step: &CopyStep) -> Result<StepOutcome> {
        let dest = step.resolved_destination(&self.dest_root);

        if step.kind == StepKind::EnsureDirectory {
            return match (self.dry_run, dest.is_dir()) {
                (true, true) => Ok(StepOutcome::AlreadyPresent),
                (true, false) => Ok(StepOutcome::WouldCreate),
                (false, _) => fs_ops::ensure_directory(&dest),
            };
        }

        let candidates = step.candidate_sources(&self.source_root);
        let Some(src) = fs_ops::first_existing(&candidates) else {
            warn!("{}: no source found, skipping", step.label);
            return Ok(StepOutcome::Skipped {
                missing: candidates,
            });
        };

        if self.dry_run {
            let refused = match step.kind {
                StepKind::CopyDirectory => fs_ops::is_overlap(src, &dest),
                _ => fs_ops::is_same_path(src, &dest),
            };
            if refused {
                return Err(MigrateError::Overlap {
                    source_path: src.clone(),
                    destination: dest,
                });
            }
            return Ok(StepOutcome::WouldCopy { from: src.clone() });
        }

        match step.kind {
            StepKind::CopyFile => fs_ops::copy_file(src, &dest),
            StepKind::CopyDirectory => fs_ops::copy_directory(src, &dest),
            StepKind::EnsureDirectory => fs_ops::ensure_directory(&dest),
        }
    }
}
