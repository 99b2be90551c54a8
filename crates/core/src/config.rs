//! Runner configuration
//!
//! All configuration comes from a handful of environment variables read
//! once at startup into an explicit [`Config`]. The installation root is
//! the single hard precondition: nothing touches the filesystem while it
//! is unset or empty.

use std::env;
use std::path::PathBuf;

use serde::Serialize;

use instep_platform::{Prefix, expand_path};

use crate::error::CoreError;

/// Recognized environment variables
pub mod vars {
    /// The installation root (required)
    pub const INSTALL_ROOT: &str = "INSTEP_ROOT";
    /// Compiler flags forwarded to build steps (optional)
    pub const COMPILER_FLAGS: &str = "INSTEP_CFLAGS";
    /// Request a 64-bit build when set to `yes`, `1`, or `true` (optional)
    pub const USE_64BIT: &str = "INSTEP_64BIT";
    /// Command template recipes use for package-manager installs (optional)
    pub const PACKAGE_INSTALL_COMMAND: &str = "INSTEP_PIP";
}

/// Resolved runner configuration
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// The installation prefix all packages install into
    pub install_root: PathBuf,
    /// Extra compiler flags exported to every step
    pub compiler_flags: Option<String>,
    /// Whether steps should build 64-bit artifacts
    pub use_64bit: bool,
    /// Package-manager invocation exported to every step
    pub package_install_command: Option<String>,
}

impl Config {
    /// Create a configuration with only the installation root set
    pub fn new<P: Into<PathBuf>>(install_root: P) -> Self {
        Self {
            install_root: install_root.into(),
            compiler_flags: None,
            use_64bit: false,
            package_install_command: None,
        }
    }

    /// Read the configuration from the environment
    ///
    /// Fails with [`CoreError::Environment`] when the installation-root
    /// variable is unset or empty. No filesystem access happens here.
    pub fn from_env() -> Result<Self, CoreError> {
        let root = nonempty_var(vars::INSTALL_ROOT).ok_or(CoreError::Environment {
            var: vars::INSTALL_ROOT,
        })?;

        Ok(Self {
            install_root: expand_path(&root)?,
            compiler_flags: nonempty_var(vars::COMPILER_FLAGS),
            use_64bit: nonempty_var(vars::USE_64BIT)
                .is_some_and(|v| matches!(v.as_str(), "yes" | "1" | "true")),
            package_install_command: nonempty_var(vars::PACKAGE_INSTALL_COMMAND),
        })
    }

    /// Re-check the installation-root precondition
    ///
    /// `from_env` already enforces this; the check exists so a hand-built
    /// `Config` cannot bypass the gate.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.install_root.as_os_str().is_empty() {
            return Err(CoreError::Environment {
                var: vars::INSTALL_ROOT,
            });
        }
        Ok(())
    }

    /// The installation prefix
    pub fn prefix(&self) -> Prefix {
        Prefix::new(&self.install_root)
    }

    /// Environment variables exported to every step
    pub(crate) fn step_env(&self) -> Vec<(&'static str, String)> {
        let mut env = vec![(
            vars::INSTALL_ROOT,
            self.install_root.display().to_string(),
        )];

        if let Some(flags) = &self.compiler_flags {
            env.push((vars::COMPILER_FLAGS, flags.clone()));
        }
        if self.use_64bit {
            env.push((vars::USE_64BIT, "yes".to_string()));
        }
        if let Some(cmd) = &self.package_install_command {
            env.push((vars::PACKAGE_INSTALL_COMMAND, cmd.clone()));
        }

        env
    }
}

/// Read an environment variable, treating empty and whitespace-only
/// values as unset.
fn nonempty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
