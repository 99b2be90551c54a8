//! Recipe files describing one package installation
//!
//! A recipe is a small TOML document naming the package, its source
//! subdirectory, the stale artifacts to sweep out of the prefix, and the
//! build/install commands to run:
//!
//! ```toml
//! name = "frobby"
//! source-dir = "src"
//!
//! [env]
//! MODE = "shared"
//!
//! [[clean]]
//! dir = "lib"
//! fragments = ["libfrobby"]
//!
//! [build]
//! command = "make library"
//!
//! [install]
//! command = "cp bin/libfrobby.* \"$INSTEP_ROOT/lib/\""
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::CoreError;

/// One external command with optional extra environment overrides
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepSpec {
    /// Shell command line to run
    pub command: String,
    /// Extra environment variables for this step only
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// A stale-artifact sweep: delete files under one prefix subdirectory
/// whose names contain any of the fragments
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepSpec {
    /// Prefix-relative directory to sweep
    pub dir: String,
    /// File-name fragments identifying stale artifacts
    pub fragments: Vec<String>,
}

/// A parsed and validated recipe
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Recipe {
    /// Package name used in diagnostics
    pub name: String,
    /// Source subdirectory, relative to the recipe file
    pub source_dir: String,
    /// Environment overrides applied to every step
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Stale artifacts to remove before installing
    #[serde(default)]
    pub clean: Vec<SweepSpec>,
    /// Optional build step, run before install
    pub build: Option<StepSpec>,
    /// Install step
    pub install: StepSpec,

    /// Directory the recipe file lives in; source-dir resolves against it
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Recipe {
    /// Load and validate a recipe file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|e| recipe_err(path, e))?;
        let mut recipe: Recipe = toml::from_str(&text).map_err(|e| recipe_err(path, e))?;

        recipe.base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        recipe.validate(path)?;

        debug!(package = %recipe.name, path = %path.display(), "loaded recipe");
        Ok(recipe)
    }

    /// The resolved source directory
    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(&self.source_dir)
    }

    fn validate(&self, path: &Path) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(recipe_err(path, "package name must not be empty"));
        }

        let source = Path::new(&self.source_dir);
        if source.as_os_str().is_empty() || source.is_absolute() {
            return Err(recipe_err(path, "source-dir must be a relative path"));
        }
        if source.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(recipe_err(path, "source-dir must not contain '..'"));
        }

        for (kind, spec) in [("build", self.build.as_ref()), ("install", Some(&self.install))] {
            if let Some(spec) = spec
                && spec.command.trim().is_empty()
            {
                return Err(recipe_err(path, format!("{kind} command must not be empty")));
            }
        }

        for sweep in &self.clean {
            if sweep.fragments.iter().any(|f| f.is_empty()) {
                return Err(recipe_err(path, "clean fragments must not be empty"));
            }
        }

        Ok(())
    }
}

fn recipe_err(path: &Path, message: impl ToString) -> CoreError {
    CoreError::Recipe {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}
