//! High-level migrator API.
//!
//! The [`Migrator`] owns two resolved roots and a [`MigrationPlan`], and
//! executes the plan one step at a time:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ MigratorBuilder │    │    Migrator     │    │ MigrationReport │
//! │ (config, roots, │───▶│ (step executor) │───▶│ (typed outcome  │
//! │  overrides)     │    │                 │    │  per step)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configuration discovery, overrides and root resolution
//! - [`executor`]: step execution and report collection
//!
//! Missing sources are skipped and the run continues. The first I/O fault
//! is recorded on its step and ends the run.
//!
//! # Usage
//!
//! ```rust,no_run
//! use porter_core::MigratorBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let migrator = MigratorBuilder::new()
//!     .with_old_project_name(Some("valute"))
//!     .build()?;
//!
//! let report = migrator.run().await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::models::MigrationPlan;

pub mod builder;
pub mod executor;

#[cfg(test)]
mod tests;

pub use builder::MigratorBuilder;

/// Executes a [`MigrationPlan`] from a source root into a destination root.
#[derive(Debug, Clone)]
pub struct Migrator {
    pub(crate) source_root: PathBuf,
    pub(crate) dest_root: PathBuf,
    pub(crate) plan: MigrationPlan,
    pub(crate) dry_run: bool,
}

impl Migrator {
    /// Creates a migrator over already resolved roots.
    pub fn new(source_root: PathBuf, dest_root: PathBuf, plan: MigrationPlan) -> Self {
        Self {
            source_root,
            dest_root,
            plan,
            dry_run: false,
        }
    }

    /// Root the plan's sources are resolved against.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Root the plan's destinations are resolved against.
    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// The plan this migrator executes.
    pub fn plan(&self) -> &MigrationPlan {
        &self.plan
    }

    /// Whether runs only inspect paths.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}
