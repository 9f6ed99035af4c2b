//! Tests for the migrator module.

use std::{fs, path::Path};

use tempfile::TempDir;

use super::*;
use crate::{
    config::MigrationConfig,
    models::{CopyStep, StepOutcome, SCHEMA_FALLBACK, SCHEMA_PRIMARY},
};

/// Helper creating `<tmp>/valute` and `<tmp>/new-app` and a migrator between them
fn create_test_migrator() -> (TempDir, Migrator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(temp_dir.path().join("valute")).expect("Failed to create source");
    fs::create_dir_all(temp_dir.path().join("new-app")).expect("Failed to create dest");
    let migrator = MigratorBuilder::new()
        .with_base_dir(temp_dir.path().join("new-app"))
        .build()
        .expect("Failed to build migrator");
    (temp_dir, migrator)
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
    fs::write(path, content).expect("write file");
}

fn schema_step(migrator: &Migrator) -> &CopyStep {
    &migrator.plan().steps[1]
}

#[test]
fn test_builder_resolves_sibling_source() {
    let (temp_dir, migrator) = create_test_migrator();

    assert_eq!(migrator.dest_root(), temp_dir.path().join("new-app"));
    assert_eq!(
        migrator.source_root(),
        temp_dir.path().join("new-app").join("..").join("valute")
    );
    assert_eq!(migrator.plan(), &MigrationPlan::default_plan());
    assert!(!migrator.is_dry_run());
}

#[test]
fn test_builder_overrides_beat_config() {
    let config = MigrationConfig {
        old_project_name: "from-config".to_string(),
        ..Default::default()
    };
    let migrator = MigratorBuilder::new()
        .with_base_dir("/work/new-app")
        .with_config(config)
        .with_old_project_name(Some("from-flag"))
        .build()
        .expect("Failed to build migrator");

    assert_eq!(
        migrator.source_root(),
        Path::new("/work/new-app/../from-flag")
    );
}

#[test]
fn test_builder_rejects_empty_project_name() {
    let result = MigratorBuilder::new()
        .with_base_dir("/work/new-app")
        .with_old_project_name(Some(""))
        .build();

    assert!(result.is_err());
}

#[test]
fn test_builder_discovers_config_in_dest_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(
        &temp_dir.path().join("porter.json"),
        r#"{ "oldProjectName": "legacy",
             "steps": [ { "label": "Readme", "kind": "copyFile",
                          "source": "README.md", "destination": "README.md" } ] }"#,
    );

    let migrator = MigratorBuilder::new()
        .with_base_dir(temp_dir.path())
        .discover_config(true)
        .build()
        .expect("Failed to build migrator");

    assert_eq!(migrator.plan().len(), 1);
    assert!(migrator.source_root().ends_with("legacy"));
}

#[test]
fn test_schema_primary_takes_precedence() {
    let (_temp_dir, migrator) = create_test_migrator();
    write(&migrator.source_root().join(SCHEMA_PRIMARY), "primary");
    write(&migrator.source_root().join(SCHEMA_FALLBACK), "fallback");

    let report = migrator.execute_step(schema_step(&migrator));

    assert!(report.outcome.is_copied());
    assert_eq!(
        fs::read_to_string(migrator.dest_root().join("drizzle/schema.ts")).expect("read"),
        "primary"
    );
}

#[test]
fn test_schema_fallback_used_when_primary_missing() {
    let (_temp_dir, migrator) = create_test_migrator();
    write(&migrator.source_root().join(SCHEMA_FALLBACK), "fallback");

    let report = migrator.execute_step(schema_step(&migrator));

    assert_eq!(
        report.outcome,
        StepOutcome::Copied {
            from: migrator.source_root().join(SCHEMA_FALLBACK)
        }
    );
    assert_eq!(
        fs::read_to_string(migrator.dest_root().join("drizzle/schema.ts")).expect("read"),
        "fallback"
    );
}

#[test]
fn test_schema_missing_everywhere_creates_nothing() {
    let (_temp_dir, migrator) = create_test_migrator();

    let report = migrator.execute_step(schema_step(&migrator));

    match &report.outcome {
        StepOutcome::Skipped { missing } => assert_eq!(missing.len(), 2),
        other => panic!("expected skip, got {other:?}"),
    }
    assert!(!migrator.dest_root().join("drizzle/schema.ts").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dest = temp_dir.path().join("new-app");
    fs::create_dir_all(&dest).expect("mkdir");
    write(&temp_dir.path().join("valute/src/main/index.ts"), "main");
    write(&temp_dir.path().join("valute/drizzle.config.ts"), "config");

    let migrator = MigratorBuilder::new()
        .with_base_dir(&dest)
        .dry_run(true)
        .build()
        .expect("Failed to build migrator");
    let report = migrator.run_blocking();

    assert!(report.dry_run);
    assert!(report.is_success());
    assert_eq!(report.steps[0].outcome, StepOutcome::WouldCreate);
    assert_eq!(report.copied_count(), 2);
    assert_eq!(
        fs::read_dir(&dest).expect("read dir").count(),
        0,
        "dry run must not touch the destination"
    );
}

#[test]
fn test_fault_stops_the_run() {
    let (_temp_dir, migrator) = create_test_migrator();
    // A file where the drizzle directory should go.
    write(&migrator.dest_root().join("drizzle"), "in the way");
    write(&migrator.source_root().join("tailwind.config.js"), "tw");

    let report = migrator.run_blocking();

    assert!(report.aborted());
    assert!(!report.is_success());
    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.not_attempted, migrator.plan().len() - 1);
    assert!(matches!(report.steps[0].outcome, StepOutcome::Failed { .. }));
    assert!(!migrator.dest_root().join("tailwind.config.js").exists());
}

#[test]
fn test_dry_run_refuses_file_copied_onto_itself() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(&temp_dir.path().join("app.ts"), "app");
    let plan = MigrationPlan::new(vec![CopyStep::file("Self", "app.ts", "app.ts")]);

    let migrator = MigratorBuilder::new()
        .with_base_dir(temp_dir.path())
        .with_source_root(Some(temp_dir.path()))
        .with_plan(plan)
        .dry_run(true)
        .build()
        .expect("Failed to build migrator");
    let report = migrator.run_blocking();

    match &report.steps[0].outcome {
        StepOutcome::Failed { kind, .. } => assert_eq!(kind, "overlap"),
        other => panic!("expected overlap failure, got {other:?}"),
    }
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("app.ts")).expect("read"),
        "app"
    );
}

#[cfg(unix)]
#[test]
fn test_special_file_in_tree_is_reported() {
    let (_temp_dir, migrator) = create_test_migrator();
    write(&migrator.source_root().join("src/main/index.ts"), "main");
    let status = std::process::Command::new("mkfifo")
        .arg(migrator.source_root().join("src/main/ipc.sock"))
        .status()
        .expect("Failed to run mkfifo");
    assert!(status.success());

    let report = migrator.run_blocking();

    assert!(report.aborted());
    let failed = report.steps.last().expect("at least one step");
    assert_eq!(failed.step.label, "Main process");
    assert!(matches!(
        &failed.outcome,
        StepOutcome::Failed { kind, .. } if kind == "special-file"
    ));
    assert!(report.to_string().contains("✗ Migration aborted"));
}

#[tokio::test]
async fn test_async_run_matches_blocking_run() {
    let (_temp_dir, migrator) = create_test_migrator();
    write(&migrator.source_root().join("drizzle.config.ts"), "config");

    let report = migrator.run().await.expect("Failed to run migration");

    assert!(report.is_success());
    assert_eq!(report.steps.len(), migrator.plan().len());
    assert_eq!(report.copied_count(), 1);
    assert_eq!(report.skipped_count(), 5);
}
