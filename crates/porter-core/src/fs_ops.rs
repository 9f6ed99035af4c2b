//! Filesystem primitives used by the migrator.
//!
//! Every function here reports a missing source as
//! [`StepOutcome::Skipped`] and only returns `Err` for real faults.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use filetime::{set_file_times, FileTime};
use log::{debug, info, warn};

use crate::{
    error::{IoResultExt, MigrateError, Result},
    models::StepOutcome,
};

/// Copy a directory tree, replacing `dest` entirely.
///
/// Anything under `dest` that is not in `src` is gone afterwards. The
/// removal and the copy are not atomic.
///
/// # Errors
///
/// Returns [`MigrateError::Overlap`] when `src` and `dest` alias or nest,
/// [`MigrateError::SpecialFile`] when the tree holds a FIFO, socket or
/// device node, and [`MigrateError::FileSystem`] for any I/O fault.
pub fn copy_directory(src: &Path, dest: &Path) -> Result<StepOutcome> {
    if !src.exists() {
        warn!("Not found: {}", src.display());
        return Ok(StepOutcome::Skipped {
            missing: vec![src.to_path_buf()],
        });
    }

    if is_overlap(src, dest) {
        return Err(MigrateError::Overlap {
            source_path: src.to_path_buf(),
            destination: dest.to_path_buf(),
        });
    }

    remove_existing(dest)?;
    copy_tree(src, dest)?;

    info!("Copied directory {} -> {}", src.display(), dest.display());
    Ok(StepOutcome::Copied {
        from: src.to_path_buf(),
    })
}

/// Copy a single file over `dest`, preserving permissions and timestamps.
///
/// Missing parent directories of `dest` are created.
///
/// # Errors
///
/// Returns [`MigrateError::Overlap`] when `src` and `dest` are the same file,
/// [`MigrateError::SpecialFile`] when `src` is not a regular file, and
/// [`MigrateError::FileSystem`] for any I/O fault.
pub fn copy_file(src: &Path, dest: &Path) -> Result<StepOutcome> {
    if !src.exists() {
        warn!("File missing: {}", src.display());
        return Ok(StepOutcome::Skipped {
            missing: vec![src.to_path_buf()],
        });
    }

    if is_same_path(src, dest) {
        return Err(MigrateError::Overlap {
            source_path: src.to_path_buf(),
            destination: dest.to_path_buf(),
        });
    }

    let meta = fs::metadata(src).fs_context(src)?;
    if !meta.is_file() {
        return Err(MigrateError::SpecialFile {
            path: src.to_path_buf(),
        });
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).fs_context(parent)?;
    }
    copy_file_with_metadata(src, dest)?;

    info!("Copied file {} -> {}", src.display(), dest.display());
    Ok(StepOutcome::Copied {
        from: src.to_path_buf(),
    })
}

/// Create `dest` and its parents if needed.
///
/// # Errors
///
/// Returns [`MigrateError::FileSystem`] if the directory cannot be created,
/// for instance because a file already sits at `dest`.
pub fn ensure_directory(dest: &Path) -> Result<StepOutcome> {
    if dest.is_dir() {
        debug!("Directory already present: {}", dest.display());
        return Ok(StepOutcome::AlreadyPresent);
    }
    fs::create_dir_all(dest).fs_context(dest)?;
    info!("Created directory {}", dest.display());
    Ok(StepOutcome::Created)
}

/// First candidate that exists on disk.
pub fn first_existing(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.iter().find(|path| path.exists())
}

fn remove_existing(dest: &Path) -> Result<()> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => {
            debug!("Removing existing directory {}", dest.display());
            fs::remove_dir_all(dest).fs_context(dest)
        }
        Ok(_) => fs::remove_file(dest).fs_context(dest),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(MigrateError::FileSystem {
            path: dest.to_path_buf(),
            source: e,
        }),
    }
}

// Symlinks are followed: the copy holds the bytes they point at.
fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).fs_context(dest)?;

    for entry in fs::read_dir(src).fs_context(src)? {
        let entry = entry.fs_context(src)?;
        let path_src = entry.path();
        let path_dest = dest.join(entry.file_name());
        let meta = fs::metadata(&path_src).fs_context(&path_src)?;

        if meta.is_dir() {
            copy_tree(&path_src, &path_dest)?;
        } else if meta.is_file() {
            copy_file_with_metadata(&path_src, &path_dest)?;
        } else {
            // Opening a FIFO for reading blocks until a writer shows up.
            return Err(MigrateError::SpecialFile { path: path_src });
        }
    }

    // After the children, so their writes do not bump the directory mtime.
    apply_metadata(src, dest)
}

fn copy_file_with_metadata(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).fs_context(dest)?;
    apply_metadata(src, dest)
}

fn apply_metadata(src: &Path, dest: &Path) -> Result<()> {
    let stat_src = fs::metadata(src).fs_context(src)?;

    let time_access = FileTime::from_last_access_time(&stat_src);
    let time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(dest, time_access, time_modify).fs_context(dest)?;

    fs::set_permissions(dest, stat_src.permissions()).fs_context(dest)
}

/// Whether one path is equal to, or lives inside, the other.
pub(crate) fn is_overlap(src: &Path, dest: &Path) -> bool {
    let src_resolved = normalize_path(src);
    let dest_resolved = normalize_path(dest);
    dest_resolved.starts_with(&src_resolved) || src_resolved.starts_with(&dest_resolved)
}

/// Whether both paths resolve to the same location.
pub(crate) fn is_same_path(a: &Path, b: &Path) -> bool {
    normalize_path(a) == normalize_path(b)
}

/// Canonicalize the deepest existing ancestor and append the rest.
fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    let absolute = lexical_clean(&absolute);

    let mut tail = Vec::new();
    let mut cursor = absolute.as_path();
    loop {
        if let Ok(resolved) = fs::canonicalize(cursor) {
            return tail.iter().rev().fold(resolved, |acc, part| acc.join(part));
        }
        match (cursor.file_name(), cursor.parent()) {
            (Some(name), Some(parent)) => {
                tail.push(name.to_os_string());
                cursor = parent;
            }
            _ => return absolute,
        }
    }
}

fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other.as_os_str()),
        }
    }
    out
}
