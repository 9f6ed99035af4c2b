use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Migrate an old Electron + Drizzle project layout into a new one
///
/// Porter copies the Drizzle schema and migrations, the main and renderer
/// source trees, and the Drizzle and Tailwind configuration files from the
/// old project (by default `../valute`, next to the current directory) into
/// the current directory. Destination directories are replaced entirely;
/// missing sources are skipped.
#[derive(Parser)]
#[command(version, about, name = "porter")]
pub struct Args {
    /// JSON configuration file. Defaults to ./porter.json, then
    /// $XDG_CONFIG_HOME/porter/porter.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory name of the old project, next to the destination root
    #[arg(long, global = true)]
    pub old_project: Option<String>,

    /// Old project root (overrides --old-project)
    #[arg(long, global = true)]
    pub source_root: Option<PathBuf>,

    /// New project root. Defaults to the current directory
    #[arg(long, global = true)]
    pub dest_root: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Porter CLI
///
/// Running `porter` without a command is the same as `porter run`.
#[derive(Subcommand)]
pub enum Commands {
    /// Copy everything in the plan
    #[command(alias = "r")]
    Run(RunArgs),
    /// Show the resolved plan without touching the filesystem
    #[command(alias = "p")]
    Plan(PlanArgs),
}

/// Execute the migration plan
#[derive(ClapArgs, Default)]
pub struct RunArgs {
    /// Report what would be copied without writing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Print the report as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Print the migration plan
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Print the plan as a JSON configuration file
    #[arg(long)]
    pub json: bool,
}
