//! Implementation of the `instep check` command.
//!
//! Resolves the configuration from the environment and reports it.
//! Exits non-zero with a diagnostic naming the missing variable when the
//! installation root is not set. Performs no filesystem mutation.

use anyhow::{Context, Result};

use instep_core::Config;

use crate::output;

pub fn cmd_check(json: bool) -> Result<()> {
  let config = Config::from_env()?;

  if json {
    let rendered =
      serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
    println!("{rendered}");
    return Ok(());
  }

  output::print_success("environment ok");
  println!("  Install root: {}", config.install_root.display());
  println!(
    "  Compiler flags: {}",
    config.compiler_flags.as_deref().unwrap_or("(unset)")
  );
  println!("  64-bit build: {}", if config.use_64bit { "yes" } else { "no" });
  println!(
    "  Package install command: {}",
    config.package_install_command.as_deref().unwrap_or("(unset)")
  );

  if !config.install_root.is_dir() {
    output::print_info("install root does not exist yet; it is created on first install");
  }

  Ok(())
}
