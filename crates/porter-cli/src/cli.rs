//! Command handlers for the Porter CLI.
//!
//! Each handler takes core types, formats them through the core display
//! implementations, and hands the markdown to the terminal renderer.

use anyhow::{bail, Context, Result};
use log::info;
use porter_core::{MigrationConfig, Migrator, PlanView};

use crate::{
    args::{PlanArgs, RunArgs},
    renderer::TerminalRenderer,
};

/// CLI handler bundling the migrator with the output renderer
pub struct Cli {
    migrator: Migrator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(migrator: Migrator, renderer: TerminalRenderer) -> Self {
        Self { migrator, renderer }
    }

    /// Run the plan and render the report, as markdown or as JSON.
    ///
    /// Missing sources still exit successfully; a failed step does not.
    pub async fn run(&self, args: &RunArgs) -> Result<()> {
        info!(
            "Running {} step(s){}",
            self.migrator.plan().len(),
            if args.dry_run { " as a dry run" } else { "" }
        );

        let report = self.migrator.run().await.context("Migration failed")?;
        if args.json {
            println!(
                "{}",
                report.to_json_pretty().context("Failed to encode report")?
            );
        } else {
            self.renderer.render(&report.to_string());
        }

        if report.aborted() {
            bail!(
                "Migration aborted after {} step(s); {} not attempted",
                report.steps.len(),
                report.not_attempted
            );
        }
        Ok(())
    }

    /// Print the resolved plan, as markdown or as a JSON config file.
    pub fn plan(&self, args: &PlanArgs) -> Result<()> {
        if args.json {
            let config = MigrationConfig {
                source_root: Some(self.migrator.source_root().to_path_buf()),
                dest_root: Some(self.migrator.dest_root().to_path_buf()),
                steps: Some(self.migrator.plan().clone()),
                ..Default::default()
            };
            println!(
                "{}",
                config.to_json_pretty().context("Failed to encode plan")?
            );
            return Ok(());
        }

        let view = PlanView {
            plan: self.migrator.plan(),
            source_root: self.migrator.source_root(),
            dest_root: self.migrator.dest_root(),
        };
        self.renderer.render(&view.to_string());
        Ok(())
    }
}
