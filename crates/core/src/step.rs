//! Step execution
//!
//! A step is one external build or install command, treated as an atomic
//! pass/fail unit. The command inherits the parent environment (install
//! tools need the ambient toolchain) with the config-derived variables
//! and recipe overrides layered on top, and runs to completion before
//! anything else happens. Steps are never retried.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::CoreError;

/// Which sub-step of a run a command belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Build,
    Install,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Build => "build",
            StepKind::Install => "install",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One external command invocation with a working directory and
/// environment overrides
#[derive(Debug, Clone)]
pub struct Step {
    pub kind: StepKind,
    pub package: String,
    pub command: String,
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
}

impl Step {
    /// Run the command to completion
    ///
    /// Stdout and stderr are inherited so the wrapped tool's output
    /// reaches the operator directly. A non-zero exit status is returned
    /// as [`CoreError::Step`] carrying the tool's own exit code.
    pub async fn run(&self) -> Result<(), CoreError> {
        info!(
            package = %self.package,
            kind = %self.kind,
            cmd = %self.command,
            "running step"
        );

        let (shell, shell_arg) = default_shell();

        let mut command = Command::new(shell);
        command.arg(shell_arg).arg(&self.command).current_dir(&self.cwd);

        for (key, value) in &self.env {
            command.env(key, value);
        }

        debug!(shell = %shell, cwd = %self.cwd.display(), "spawning process");

        let status = command.status().await?;

        if !status.success() {
            return Err(CoreError::Step {
                kind: self.kind,
                package: self.package.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// The shell used to run step command lines.
///
/// Always `/bin/sh` on Unix rather than `$SHELL`: interactive shells may
/// source profile files that alter the toolchain environment.
fn default_shell() -> (&'static str, &'static str) {
    #[cfg(unix)]
    {
        ("/bin/sh", "-c")
    }

    #[cfg(windows)]
    {
        ("cmd.exe", "/C")
    }
}
