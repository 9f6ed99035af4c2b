//! Data models for migration plans, steps and their outcomes.
//!
//! Display implementations for these models live in [`crate::display`] to
//! keep data structures separate from presentation.

pub mod kind;
pub mod outcome;
pub mod plan;
pub mod report;
pub mod step;


pub use kind::StepKind;
pub use outcome::{StepOutcome, StepReport};
pub use plan::{MigrationPlan, SCHEMA_FALLBACK, SCHEMA_PRIMARY};
pub use report::MigrationReport;
pub use step::CopyStep;
