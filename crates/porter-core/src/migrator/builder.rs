//! Builder for creating and configuring Migrator instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Migrator;
use crate::{
    config::MigrationConfig,
    error::{IoResultExt, Result},
    models::MigrationPlan,
};

/// Builder for creating and configuring Migrator instances.
///
/// Settings are layered, highest precedence first: explicit overrides set
/// on the builder, then the configuration (given directly, read from a
/// file, or discovered), then built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct MigratorBuilder {
    config: Option<MigrationConfig>,
    config_file: Option<PathBuf>,
    discover_config: bool,
    base_dir: Option<PathBuf>,
    old_project_name: Option<String>,
    source_root: Option<PathBuf>,
    dest_root: Option<PathBuf>,
    plan: Option<MigrationPlan>,
    dry_run: bool,
}

impl MigratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an in-memory configuration instead of reading one.
    pub fn with_config(mut self, config: MigrationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Reads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Looks for `porter.json` in the destination root, then the XDG config
    /// directory, when no configuration is given explicitly.
    pub fn discover_config(mut self, enabled: bool) -> Self {
        self.discover_config = enabled;
        self
    }

    /// Directory the roots are resolved against. Defaults to the current
    /// working directory.
    pub fn with_base_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the old project directory name.
    pub fn with_old_project_name<S: Into<String>>(mut self, name: Option<S>) -> Self {
        if let Some(name) = name {
            self.old_project_name = Some(name.into());
        }
        self
    }

    /// Overrides the source root.
    pub fn with_source_root<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.source_root = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the destination root.
    pub fn with_dest_root<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.dest_root = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the plan.
    pub fn with_plan(mut self, plan: MigrationPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Only inspect paths, never write.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Builds the configured migrator.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::FileSystem` if the working directory or the
    /// configuration file cannot be read, `MigrateError::Config` if the file
    /// is malformed, and `MigrateError::InvalidInput` if the merged settings
    /// are invalid.
    pub fn build(self) -> Result<Migrator> {
        let base_dir = match self.base_dir {
            Some(dir) => dir,
            None => std::env::current_dir().fs_context(Path::new("."))?,
        };

        let mut config = match (self.config, self.config_file) {
            (Some(config), _) => config,
            (None, Some(path)) => MigrationConfig::from_file(&path)?,
            (None, None) if self.discover_config => {
                let root = self.dest_root.as_deref().unwrap_or(base_dir.as_path());
                match MigrationConfig::discover(root) {
                    Some(path) => MigrationConfig::from_file(&path)?,
                    None => MigrationConfig::default(),
                }
            }
            (None, None) => MigrationConfig::default(),
        };

        if let Some(name) = self.old_project_name {
            config.old_project_name = name;
        }
        if self.source_root.is_some() {
            config.source_root = self.source_root;
        }
        if self.dest_root.is_some() {
            config.dest_root = self.dest_root;
        }
        if self.plan.is_some() {
            config.steps = self.plan;
        }
        config.validate()?;

        let (source_root, dest_root) = config.resolve_roots(&base_dir);
        debug!(
            "Resolved roots: source={} dest={}",
            source_root.display(),
            dest_root.display()
        );

        let mut migrator = Migrator::new(source_root, dest_root, config.plan());
        migrator.dry_run = self.dry_run;
        Ok(migrator)
    }
}
