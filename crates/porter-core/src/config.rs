//! Migration configuration and root path resolution.
//!
//! A configuration file is plain JSON with camelCase keys:
//!
//! ```json
//! {
//!   "oldProjectName": "valute",
//!   "destRoot": "/home/user/new-app",
//!   "steps": [
//!     { "label": "Drizzle directory", "kind": "ensureDirectory", "destination": "drizzle" }
//!   ]
//! }
//! ```
//!
//! Every key is optional. Lookup order when no file is given explicitly:
//! `porter.json` in the destination root, then
//! `$XDG_CONFIG_HOME/porter/porter.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{IoResultExt, MigrateError, Result},
    models::MigrationPlan,
};

/// Old project directory name used when nothing else is configured.
pub const DEFAULT_OLD_PROJECT_NAME: &str = "valute";

/// Name of the configuration file looked up in the destination root and the
/// XDG config directory.
pub const CONFIG_FILE_NAME: &str = "porter.json";

/// Externalized migration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MigrationConfig {
    /// Directory name of the old project, a sibling of the destination root
    pub old_project_name: String,

    /// Explicit source root; overrides `<destRoot>/../<oldProjectName>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<PathBuf>,

    /// Explicit destination root; defaults to the working directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_root: Option<PathBuf>,

    /// Copy steps; the built-in plan when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<MigrationPlan>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            old_project_name: DEFAULT_OLD_PROJECT_NAME.to_string(),
            source_root: None,
            dest_root: None,
            steps: None,
        }
    }
}

impl MigrationConfig {
    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::FileSystem` if the file cannot be read and
    /// `MigrateError::Config` if it is not valid configuration JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).fs_context(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| MigrateError::config(path, e.to_string()))?;
        config.validate().map_err(|e| MigrateError::config(path, e.to_string()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Find a configuration file in `dest_root` or the XDG config directory.
    pub fn discover(dest_root: &Path) -> Option<PathBuf> {
        let local = dest_root.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        xdg::BaseDirectories::with_prefix("porter").find_config_file(CONFIG_FILE_NAME)
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::InvalidInput` for an empty, padded or path-like
    /// project name and for copy steps without a source.
    pub fn validate(&self) -> Result<()> {
        if self.source_root.is_none() {
            let name = self.old_project_name.as_str();
            if name.trim().is_empty() {
                return Err(MigrateError::invalid_input("oldProjectName")
                    .with_reason("must not be empty"));
            }
            if name.trim() != name {
                return Err(MigrateError::invalid_input("oldProjectName")
                    .with_reason("must not start or end with whitespace"));
            }
            if name.contains(&['/', '\\'][..]) {
                return Err(MigrateError::invalid_input("oldProjectName")
                    .with_reason("must be a directory name, use sourceRoot for paths"));
            }
        }

        if let Some(plan) = &self.steps {
            for step in plan {
                if step.kind.reads_source() && step.source.is_none() {
                    return Err(MigrateError::invalid_input("steps")
                        .with_reason(format!("step '{}' has no source", step.label)));
                }
            }
        }
        Ok(())
    }

    /// Serialize as a pretty-printed configuration file.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The configured plan, or the built-in one.
    pub fn plan(&self) -> MigrationPlan {
        self.steps.clone().unwrap_or_else(MigrationPlan::default_plan)
    }

    /// Resolve both roots relative to `base_dir`.
    ///
    /// Explicit roots win; otherwise [`resolve_paths`] applies.
    pub fn resolve_roots(&self, base_dir: &Path) -> (PathBuf, PathBuf) {
        let dest_root = self
            .dest_root
            .clone()
            .unwrap_or_else(|| base_dir.to_path_buf());
        let source_root = match &self.source_root {
            Some(root) => root.clone(),
            None => resolve_paths(&self.old_project_name, &dest_root).0,
        };
        (source_root, dest_root)
    }
}

/// Resolve `(source_root, dest_root)` for an old project next to `base_dir`.
///
/// `dest_root` is `base_dir` itself and `source_root` is
/// `base_dir/../old_project_name`. Neither path is checked for existence.
pub fn resolve_paths(old_project_name: &str, base_dir: &Path) -> (PathBuf, PathBuf) {
    let source_root = base_dir.join("..").join(old_project_name);
    (source_root, base_dir.to_path_buf())
}
