//! Porter CLI Application
//!
//! Command-line interface for the Porter project layout migrator.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, RunArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use porter_core::MigratorBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        old_project,
        source_root,
        dest_root,
        no_color,
        command,
    } = Args::parse();

    let command = command.unwrap_or(Commands::Run(RunArgs::default()));
    let dry_run = matches!(&command, Commands::Run(RunArgs { dry_run: true, .. }));

    let migrator = MigratorBuilder::new()
        .with_config_file(config.as_ref())
        .discover_config(true)
        .with_old_project_name(old_project)
        .with_source_root(source_root.as_ref())
        .with_dest_root(dest_root.as_ref())
        .dry_run(dry_run)
        .build()
        .context("Failed to initialize migrator")?;

    let cli = Cli::new(migrator, TerminalRenderer::new(!no_color));

    info!("Porter started");

    match command {
        Commands::Run(args) => cli.run(&args).await,
        Commands::Plan(args) => cli.plan(&args),
    }
}
