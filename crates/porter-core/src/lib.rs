//! Core library for the Porter project layout migrator.
//!
//! Porter copies a fixed set of files and directories (database schema,
//! migrations, main and renderer source trees, configuration files) from an
//! old project into a new one. Each step either replaces a whole directory,
//! overwrites a single file, or makes sure a directory exists.
//!
//! A missing source is never an error: the step is skipped and the run goes
//! on, so the migration can be re-run against an incomplete old tree. An
//! I/O fault stops the run and is recorded on its step in the
//! [`MigrationReport`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use porter_core::MigratorBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let migrator = MigratorBuilder::new()
//!     .with_base_dir("/home/user/new-app")
//!     .with_old_project_name(Some("valute"))
//!     .build()?;
//!
//! let report = migrator.run().await?;
//! for step in &report.steps {
//!     println!("{}: {}", step.step.label, step.outcome);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod fs_ops;
pub mod migrator;
pub mod models;

// Re-export commonly used types
pub use config::{resolve_paths, MigrationConfig};
pub use display::{Banner, PlanView};
pub use error::{MigrateError, Result};
pub use fs_ops::{copy_directory, copy_file, ensure_directory};
pub use migrator::{Migrator, MigratorBuilder};
pub use models::{CopyStep, MigrationPlan, MigrationReport, StepKind, StepOutcome, StepReport};
