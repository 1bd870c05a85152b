//! Folder plan and example file materialization

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::flavor::StaticFile;
use crate::log;
use crate::paths::project::{marker_path, FOLDER_PLAN};

/// Create every planned directory with its empty marker.
///
/// Existing directories are kept as they are; the marker is (re)written empty.
pub fn create_folders(root: &Path) -> Result<()> {
    for dir in FOLDER_PLAN {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;

        let marker = marker_path(root, dir);
        fs::write(&marker, "")
            .with_context(|| format!("Failed to write {}", marker.display()))?;
    }
    log::debug(
        "scaffold",
        format_args!("ensured {} folders under {}", FOLDER_PLAN.len(), root.display()),
    );
    Ok(())
}

/// Write a file relative to `root`, replacing whatever was there
pub fn write_static(root: &Path, file: &StaticFile, project_name: &str) -> Result<()> {
    let path = root.join(file.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, file.render(project_name))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug("scaffold", format_args!("wrote {}", file.path));
    Ok(())
}

pub fn write_files(root: &Path, files: &[StaticFile], project_name: &str) -> Result<()> {
    for file in files {
        write_static(root, file, project_name)?;
    }
    Ok(())
}
