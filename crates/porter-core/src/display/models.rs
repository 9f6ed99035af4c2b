//! Display implementations for domain models.

use std::fmt;

use crate::models::{CopyStep, StepKind, StepOutcome, StepReport};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CopyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** ({})", self.label, self.kind)?;
        if let Some(source) = &self.source {
            write!(f, " `{}`", source.display())?;
        }
        for fallback in &self.fallbacks {
            write!(f, " (fallback: `{}`)", fallback.display())?;
        }
        write!(f, " → `{}`", self.destination.display())
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Copied { from } | StepOutcome::WouldCopy { from } => {
                write!(f, "{} from `{}`", self.with_icon(), from.display())
            }
            StepOutcome::Skipped { missing } if missing.is_empty() => {
                write!(f, "{}: nothing to copy", self.with_icon())
            }
            StepOutcome::Skipped { missing } => {
                write!(f, "{}: not found", self.with_icon())?;
                for path in missing {
                    write!(f, " `{}`", path.display())?;
                }
                Ok(())
            }
            StepOutcome::Failed { error, .. } => write!(f, "{}: {error}", self.with_icon()),
            StepOutcome::Created | StepOutcome::AlreadyPresent | StepOutcome::WouldCreate => {
                write!(f, "{}", self.with_icon())
            }
        }
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**{}** → `{}`: {}",
            self.step.label,
            self.destination.display(),
            self.outcome
        )
    }
}
