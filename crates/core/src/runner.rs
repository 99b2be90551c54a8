//! Run orchestration
//!
//! A run is a fixed, fully sequential sequence: check the environment
//! precondition, resolve the source directory, sweep stale artifacts,
//! run the build step if the recipe has one, then run the install step.
//! The first failure aborts the run; nothing is retried or rolled back.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::clean::sweep_stale;
use crate::config::Config;
use crate::error::CoreError;
use crate::recipe::{Recipe, StepSpec};
use crate::step::{Step, StepKind};

/// Options controlling a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Validate and report without executing steps or deleting anything
    pub dry_run: bool,
}

/// Summary of a completed run
#[derive(Debug)]
pub struct RunReport {
    /// Package the run installed
    pub package: String,
    /// Steps that were executed, in order
    pub steps: Vec<StepKind>,
    /// Stale artifacts removed before installing
    pub removed: Vec<PathBuf>,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

/// Run one recipe against the configured installation root
///
/// On failure the error names the failed sub-step and package; the
/// install step is never invoked after a failed build.
pub async fn run_recipe(
    recipe: &Recipe,
    config: &Config,
    options: &RunOptions,
) -> Result<RunReport, CoreError> {
    let started = Instant::now();

    // Precondition gate: nothing below runs, and nothing is mutated,
    // while the installation root is unset.
    config.validate()?;

    let source = recipe.source_path();
    if !source.is_dir() {
        return Err(CoreError::SourceDirMissing(source));
    }

    let mut report = RunReport {
        package: recipe.name.clone(),
        steps: Vec::new(),
        removed: Vec::new(),
        duration: Duration::ZERO,
    };

    if options.dry_run {
        debug!(package = %recipe.name, "dry run, skipping execution");
        report.duration = started.elapsed();
        return Ok(report);
    }

    config.prefix().ensure_layout()?;
    report.removed = sweep_stale(&config.install_root, &recipe.clean)?;

    if let Some(spec) = &recipe.build {
        make_step(StepKind::Build, recipe, spec, &source, config).run().await?;
        report.steps.push(StepKind::Build);
    }

    make_step(StepKind::Install, recipe, &recipe.install, &source, config)
        .run()
        .await?;
    report.steps.push(StepKind::Install);

    report.duration = started.elapsed();
    info!(
        package = %report.package,
        steps = report.steps.len(),
        removed = report.removed.len(),
        "run complete"
    );

    Ok(report)
}

/// Assemble one step: config-derived variables first, then recipe-wide
/// overrides, then per-step overrides.
fn make_step(
    kind: StepKind,
    recipe: &Recipe,
    spec: &StepSpec,
    source: &std::path::Path,
    config: &Config,
) -> Step {
    let mut env: BTreeMap<String, String> = config
        .step_env()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    env.extend(recipe.env.clone());
    env.extend(spec.env.clone());

    Step {
        kind,
        package: recipe.name.clone(),
        command: spec.command.clone(),
        cwd: source.to_path_buf(),
        env,
    }
}
