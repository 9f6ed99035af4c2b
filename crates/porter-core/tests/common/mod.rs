use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use porter_core::{Migrator, MigratorBuilder};
use tempfile::TempDir;

/// Sibling `valute` (old) and `new-app` (new) projects in one temp dir
pub struct Workspace {
    pub temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("new-app")).expect("Failed to create dest");
        Self { temp_dir }
    }

    pub fn old(&self) -> PathBuf {
        self.temp_dir.path().join("valute")
    }

    pub fn new_app(&self) -> PathBuf {
        self.temp_dir.path().join("new-app")
    }

    pub fn migrator(&self) -> Migrator {
        MigratorBuilder::new()
            .with_base_dir(self.new_app())
            .build()
            .expect("Failed to build migrator")
    }

    /// Lay out every path the default plan reads.
    pub fn populate_old_project(&self) {
        let old = self.old();
        write(&old.join("Database Schema (Drizzle ORM).ts"), "export const users = table();");
        write(&old.join("src/main/db/schema.ts"), "export const legacy = table();");
        write(&old.join("src/main/db/migrations/0000_init.sql"), "CREATE TABLE users;");
        write(&old.join("src/main/db/migrations/meta/_journal.json"), "{}");
        write(&old.join("drizzle.config.ts"), "export default { schema: './drizzle/schema.ts' };");
        write(&old.join("src/main/index.ts"), "app.whenReady();");
        write(&old.join("src/main/ipc/handlers.ts"), "ipcMain.handle();");
        write(&old.join("src/renderer/src/App.tsx"), "export function App() {}");
        write(&old.join("src/renderer/src/components/Button.tsx"), "export const Button = 1;");
        write(&old.join("tailwind.config.js"), "module.exports = {};");
    }
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("Failed to create parent");
    fs::write(path, content).expect("Failed to write file");
}

/// Relative path → file bytes for every file under `root`
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).expect("Failed to read dir") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).expect("under root").to_path_buf();
                out.insert(relative, fs::read(&path).expect("Failed to read file"));
            }
        }
    }

    let mut out = BTreeMap::new();
    if root.exists() {
        walk(root, root, &mut out);
    }
    out
}
