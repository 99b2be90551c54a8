//! Implementation of the `instep install` command.
//!
//! Loads the configuration from the environment, loads the recipe, and
//! runs the full sequence: sweep stale artifacts, build, install. Prints
//! a summary on success. On failure the process exits with the failed
//! step's propagated exit code.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use instep_core::{Config, Recipe, RunOptions, run_recipe};

use crate::output;

pub fn cmd_install(recipe_path: &Path) -> Result<()> {
  let config = Config::from_env()?;
  let recipe = Recipe::load(recipe_path)?;

  info!(prefix = %config.install_root.display(), package = %recipe.name, "starting install");

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let report = rt.block_on(run_recipe(&recipe, &config, &RunOptions::default()))?;

  output::print_success(&format!(
    "{} installed into {}",
    report.package,
    config.install_root.display()
  ));
  println!(
    "  Steps run: {}",
    report
      .steps
      .iter()
      .map(|s| s.as_str())
      .collect::<Vec<_>>()
      .join(", ")
  );
  println!("  Stale artifacts removed: {}", report.removed.len());
  println!("  Took: {}", output::format_duration(report.duration));

  Ok(())
}
