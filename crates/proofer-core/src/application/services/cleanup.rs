//! Output-directory cleanup.
//!
//! One recursive-delete primitive shared by the three call sites that are
//! allowed to destroy output: conflict resolution under the `clean`
//! strategy, end-of-run auto-cleanup, and the `cleanup` CLI command. Deletes
//! are scoped exactly to the given path, never an ancestor.

use std::path::Path;

use tracing::debug;

use crate::application::ports::{Filesystem, Reporter};
use crate::error::ProoferResult;

/// Files the whole-directory cleanup leaves in place.
const KEEP_SENTINELS: &[&str] = &[".gitkeep"];

/// Remove a generated tree. No-op (not an error) when the path is absent,
/// so calling it twice in a row is safe.
pub fn remove_tree(
    fs: &dyn Filesystem,
    reporter: &dyn Reporter,
    path: &Path,
) -> ProoferResult<()> {
    if !fs.exists(path) {
        debug!(path = %path.display(), "nothing to clean up");
        return Ok(());
    }
    reporter.info(&format!("Cleaning up {}", path.display()));
    fs.remove_dir_all(path)?;
    reporter.success(&format!("Removed {}", path.display()));
    Ok(())
}

/// Empty a whole output directory, preserving sentinel files like
/// `.gitkeep`. Absent directory is a no-op.
pub fn clean_output_dir(
    fs: &dyn Filesystem,
    reporter: &dyn Reporter,
    output_dir: &Path,
) -> ProoferResult<()> {
    if !fs.exists(output_dir) {
        reporter.info(&format!(
            "Output directory does not exist: {}",
            output_dir.display()
        ));
        return Ok(());
    }

    for entry in fs.read_dir(output_dir)? {
        let keep = entry
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| KEEP_SENTINELS.contains(&n));
        if keep {
            continue;
        }
        if fs.is_dir(&entry) {
            fs.remove_dir_all(&entry)?;
        } else {
            fs.remove_file(&entry)?;
        }
        reporter.success(&format!("Removed {}", entry.display()));
    }
    Ok(())
}
