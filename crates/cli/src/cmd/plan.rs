//! Implementation of the `instep plan` command.
//!
//! Validates the environment precondition and the recipe's source
//! directory, then prints the sweeps and steps a real run would perform.
//! Nothing is executed and nothing is deleted.

use std::path::Path;

use anyhow::{Context, Result};

use instep_core::{Config, Recipe, RunOptions, run_recipe};

use crate::output::{self, symbols};

pub fn cmd_plan(recipe_path: &Path) -> Result<()> {
  let config = Config::from_env()?;
  let recipe = Recipe::load(recipe_path)?;

  // Dry run performs the precondition and source-directory checks only
  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  rt.block_on(run_recipe(&recipe, &config, &RunOptions { dry_run: true }))?;

  output::print_info(&format!("Plan for package '{}'", recipe.name));
  println!("  Source: {}", recipe.source_path().display());
  println!("  Prefix: {}", config.install_root.display());

  for sweep in &recipe.clean {
    println!(
      "  sweep {} {} remove files matching [{}]",
      sweep.dir,
      symbols::ARROW,
      sweep.fragments.join(", ")
    );
  }

  if let Some(build) = &recipe.build {
    println!("  build {} {}", symbols::ARROW, build.command);
  }
  println!("  install {} {}", symbols::ARROW, recipe.install.command);

  Ok(())
}
