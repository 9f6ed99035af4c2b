//! Migration plan model definition and the built-in default plan.

use serde::{Deserialize, Serialize};

use super::CopyStep;

/// Primary location of the Drizzle schema in the old project.
pub const SCHEMA_PRIMARY: &str = "Database Schema (Drizzle ORM).ts";

/// Fallback location of the Drizzle schema in the old project.
pub const SCHEMA_FALLBACK: &str = "src/main/db/schema.ts";

/// Ordered sequence of copy steps.
///
/// Steps are independent of each other; order only affects how the report
/// reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct MigrationPlan {
    pub steps: Vec<CopyStep>,
}

impl MigrationPlan {
    /// Creates a plan from explicit steps.
    pub fn new(steps: Vec<CopyStep>) -> Self {
        Self { steps }
    }

    /// The Electron + Drizzle layout migration.
    pub fn default_plan() -> Self {
        Self::new(vec![
            CopyStep::ensure_directory("Drizzle directory", "drizzle"),
            CopyStep::file("Schema", SCHEMA_PRIMARY, "drizzle/schema.ts")
                .with_fallback(SCHEMA_FALLBACK),
            CopyStep::directory("Migrations", "src/main/db/migrations", "drizzle/migrations"),
            CopyStep::file("Drizzle config", "drizzle.config.ts", "drizzle.config.ts"),
            CopyStep::directory("Main process", "src/main", "src/main"),
            CopyStep::directory("Renderer process", "src/renderer/src", "src/renderer/src"),
            CopyStep::file("Tailwind config", "tailwind.config.js", "tailwind.config.js"),
        ])
    }

    /// Number of steps in the plan.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over steps in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, CopyStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a MigrationPlan {
    type Item = &'a CopyStep;
    type IntoIter = std::slice::Iter<'a, CopyStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
