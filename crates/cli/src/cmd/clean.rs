//! Implementation of the `instep clean` command.
//!
//! Runs only the stale-artifact sweep from a recipe, without building or
//! installing anything.

use std::path::Path;

use anyhow::Result;

use instep_core::{Config, Recipe, sweep_stale};

use crate::output;

pub fn cmd_clean(recipe_path: &Path) -> Result<()> {
  let config = Config::from_env()?;
  let recipe = Recipe::load(recipe_path)?;

  let removed = sweep_stale(&config.install_root, &recipe.clean)?;

  for path in &removed {
    println!("  removed {}", path.display());
  }
  output::print_success(&format!(
    "swept {} stale artifact(s) for '{}'",
    removed.len(),
    recipe.name
  ));

  Ok(())
}
