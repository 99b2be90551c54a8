//! Stale-artifact sweeping
//!
//! Before a package reinstalls, leftovers from a previous version are
//! removed from the prefix so the new install never sits alongside stale
//! libraries or headers. A sweep is limited to the prefix subdirectories
//! the recipe declares and deletes only files whose names contain one of
//! the declared fragments.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use instep_platform::Prefix;

use crate::error::CoreError;
use crate::recipe::SweepSpec;

/// Remove stale artifacts from the installation root
///
/// Returns the paths that were removed. Directories are never deleted,
/// and a declared subdirectory that does not exist is skipped silently.
pub fn sweep_stale(install_root: &Path, sweeps: &[SweepSpec]) -> Result<Vec<PathBuf>, CoreError> {
    let prefix = Prefix::new(install_root);
    let mut removed = Vec::new();

    for sweep in sweeps {
        let dir = prefix.subdir(&sweep.dir)?;

        if !dir.is_dir() {
            debug!(dir = %dir.display(), "sweep directory absent, skipping");
            continue;
        }

        for entry in WalkDir::new(&dir).min_depth(1).follow_links(false) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if sweep.fragments.iter().any(|f| name.contains(f.as_str())) {
                fs::remove_file(entry.path())?;
                info!(path = %entry.path().display(), "removed stale artifact");
                removed.push(entry.path().to_path_buf());
            }
        }
    }

    Ok(removed)
}
