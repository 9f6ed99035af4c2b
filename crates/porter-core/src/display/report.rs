//! Report and plan wrapper types for displaying migration runs.

use std::{fmt, path::Path};

use super::datetime::{Elapsed, LocalDateTime};
use crate::models::{MigrationPlan, MigrationReport};

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            writeln!(f, "# Migration Report (dry run)")?;
        } else {
            writeln!(f, "# Migration Report")?;
        }
        writeln!(f)?;

        writeln!(f, "- Source: `{}`", self.source_root.display())?;
        writeln!(f, "- Destination: `{}`", self.dest_root.display())?;
        writeln!(f, "- Started: {}", LocalDateTime(&self.started_at))?;
        writeln!(
            f,
            "- Duration: {}",
            Elapsed(&self.started_at, &self.finished_at)
        )?;

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this plan.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for (index, step) in self.steps.iter().enumerate() {
                write!(f, "{}. {}", index + 1, step)?;
            }
        }

        if self.not_attempted > 0 {
            writeln!(f)?;
            writeln!(f, "{} step(s) not attempted.", self.not_attempted)?;
        }

        writeln!(f)?;
        write!(f, "{}", Banner(self))
    }
}

/// Final one-line status for a run.
///
/// Printed whether or not any source was found; only a failed step changes
/// it.
pub struct Banner<'a>(pub &'a MigrationReport);

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let counts = format!(
            "{} copied, {} skipped, {} failed",
            report.copied_count(),
            report.skipped_count(),
            report.failed_count()
        );
        if report.aborted() {
            writeln!(f, "✗ Migration aborted: {counts}")
        } else if report.dry_run {
            writeln!(f, "○ Dry run complete: {counts}")
        } else {
            writeln!(f, "🎉 Migration complete: {counts}")
        }
    }
}

/// A plan shown together with the roots it resolves against.
pub struct PlanView<'a> {
    pub plan: &'a MigrationPlan,
    pub source_root: &'a Path,
    pub dest_root: &'a Path,
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Migration Plan")?;
        writeln!(f)?;
        writeln!(f, "- Source: `{}`", self.source_root.display())?;
        writeln!(f, "- Destination: `{}`", self.dest_root.display())?;

        if self.plan.is_empty() {
            return writeln!(f, "\nNo steps in this plan.");
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (index, step) in self.plan.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use jiff::Timestamp;

    use super::*;
    use crate::models::{CopyStep, StepOutcome, StepReport};

    fn report(outcomes: Vec<StepOutcome>, not_attempted: usize) -> MigrationReport {
        let steps = outcomes
            .into_iter()
            .enumerate()
            .map(|(i, outcome)| StepReport {
                step: CopyStep::file(format!("Step {i}"), "a", "b"),
                destination: PathBuf::from("/new/b"),
                outcome,
            })
            .collect();
        MigrationReport {
            source_root: PathBuf::from("/old"),
            dest_root: PathBuf::from("/new"),
            dry_run: false,
            started_at: Timestamp::now(),
            finished_at: Timestamp::now(),
            steps,
            not_attempted,
        }
    }

    #[test]
    fn test_banner_printed_when_everything_skipped() {
        let report = report(
            vec![
                StepOutcome::Skipped {
                    missing: vec![PathBuf::from("/old/a")],
                },
                StepOutcome::Skipped {
                    missing: vec![PathBuf::from("/old/c")],
                },
            ],
            0,
        );
        let output = report.to_string();

        assert!(output.contains("# Migration Report"));
        assert!(output.contains("1. **Step 0**"));
        assert!(output.contains("🎉 Migration complete: 0 copied, 2 skipped, 0 failed"));
    }

    #[test]
    fn test_aborted_report_mentions_remaining_steps() {
        let report = report(
            vec![StepOutcome::Failed {
                kind: "permission-denied".to_string(),
                error: "denied".to_string(),
            }],
            3,
        );
        let output = report.to_string();

        assert!(output.contains("✗ Failed: denied"));
        assert!(output.contains("3 step(s) not attempted."));
        assert!(output.contains("✗ Migration aborted"));
    }

    #[test]
    fn test_dry_run_banner() {
        let mut report = report(
            vec![
                StepOutcome::WouldCreate,
                StepOutcome::WouldCopy {
                    from: PathBuf::from("/old/a"),
                },
            ],
            0,
        );
        report.dry_run = true;
        let output = report.to_string();

        assert!(output.contains("# Migration Report (dry run)"));
        assert!(output.contains("○ Would copy"));
        assert!(output.contains("○ Dry run complete: 1 copied, 0 skipped, 0 failed"));
        assert!(!output.contains("🎉"));
    }

    #[test]
    fn test_report_json_uses_camel_case() {
        let report = report(
            vec![StepOutcome::Skipped {
                missing: vec![PathBuf::from("/old/a")],
            }],
            2,
        );
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().expect("encode")).expect("decode");

        assert_eq!(json["dryRun"], false);
        assert_eq!(json["notAttempted"], 2);
        assert_eq!(json["sourceRoot"], "/old");
        assert_eq!(json["steps"][0]["outcome"]["status"], "skipped");
        assert_eq!(json["steps"][0]["outcome"]["missing"][0], "/old/a");
    }

    #[test]
    fn test_plan_view_lists_steps() {
        let plan = MigrationPlan::default_plan();
        let view = PlanView {
            plan: &plan,
            source_root: Path::new("/old"),
            dest_root: Path::new("/new"),
        };
        let output = view.to_string();

        assert!(output.contains("# Migration Plan"));
        assert!(output.contains("7. **Tailwind config**"));
    }
}
