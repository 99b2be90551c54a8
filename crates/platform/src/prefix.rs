//! The installation prefix and its conventional layout
//!
//! All packages are installed under a single fixed prefix:
//! ```text
//! <root>/
//! ├── bin/      # Executables
//! ├── lib/      # Shared and static libraries
//! ├── include/  # Headers
//! └── share/    # Architecture-independent data
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::PlatformError;

/// The installation root under which all packages are installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prefix {
    root: PathBuf,
}

impl Prefix {
    /// Create a prefix rooted at the given directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The installation root itself
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `bin` directory under the prefix
    pub fn bin(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// The `lib` directory under the prefix
    pub fn lib(&self) -> PathBuf {
        self.root.join("lib")
    }

    /// The `include` directory under the prefix
    pub fn include(&self) -> PathBuf {
        self.root.join("include")
    }

    /// The `share` directory under the prefix
    pub fn share(&self) -> PathBuf {
        self.root.join("share")
    }

    /// Resolve a prefix-relative subdirectory
    ///
    /// Rejects absolute paths and paths with `..` components, so a caller
    /// can never be directed outside the installation root.
    pub fn subdir<P: AsRef<Path>>(&self, rel: P) -> Result<PathBuf, PlatformError> {
        let rel = rel.as_ref();

        if rel.is_absolute() {
            return Err(PlatformError::AbsoluteSubdir(rel.display().to_string()));
        }

        for component in rel.components() {
            if matches!(component, Component::ParentDir) {
                return Err(PlatformError::EscapesPrefix(rel.display().to_string()));
            }
        }

        Ok(self.root.join(rel))
    }

    /// Create the conventional layout directories if they do not exist
    pub fn ensure_layout(&self) -> Result<(), PlatformError> {
        fs::create_dir_all(self.bin())?;
        fs::create_dir_all(self.lib())?;
        fs::create_dir_all(self.include())?;
        fs::create_dir_all(self.share())?;

        info!("Prefix layout ready at {}", self.root.display());
        Ok(())
    }
}
