//! Output tree housekeeping between batch runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use artpack_core::Role;

/// Result of clearing a workspace.
#[derive(Debug, Default)]
pub struct ClearSummary {
    /// Direct children of the root that were removed
    pub removed: usize,
    /// Entries that could not be removed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl ClearSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Remove everything inside `root`, keeping `root` itself.
///
/// A missing root is a no-op. Entries that cannot be removed are logged and
/// listed in the summary; clearing carries on with the rest.
pub fn clear(root: &Path) -> ClearSummary {
    clear_with(root, remove_entry)
}

pub(crate) fn clear_with(root: &Path, remove: impl Fn(&Path) -> io::Result<()>) -> ClearSummary {
    let mut summary = ClearSummary::default();

    if !root.exists() {
        log::info!("Directory {} does not exist, skipping clear", root.display());
        return summary;
    }

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Error reading directory {}: {}", root.display(), e);
            summary.failed.push((root.to_path_buf(), e.to_string()));
            return summary;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("Error reading entry in {}: {}", root.display(), e);
                summary.failed.push((root.to_path_buf(), e.to_string()));
                continue;
            }
        };
        let path = entry.path();
        match remove(&path) {
            Ok(()) => summary.removed += 1,
            Err(e) => {
                log::error!("Error removing {}: {}", path.display(), e);
                summary.failed.push((path, e.to_string()));
            }
        }
    }

    log::debug!(
        "Cleared {} ({} removed, {} failed)",
        root.display(),
        summary.removed,
        summary.failed.len()
    );
    summary
}

/// Delete a file, symlink, or directory tree. Symlinked directories are
/// unlinked, not followed.
fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Create `root` if needed.
pub fn prepare(root: &Path) -> io::Result<()> {
    fs::create_dir_all(root)
}

/// Create the per-role subdirectories under `root`. Idempotent.
pub fn ensure_role_dirs(root: &Path) -> io::Result<()> {
    for role in Role::ALL {
        fs::create_dir_all(root.join(role.dir_name()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/workspace_tests.rs"]
mod tests;
