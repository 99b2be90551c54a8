//! instep - install-step runner for a fixed prefix
//!
//! Each invocation runs one recipe: validate the environment
//! precondition, enter the package's source directory, sweep stale
//! artifacts out of the installation root, then run the recipe's build
//! and install commands. Failures map to process exit codes understood
//! by the calling orchestrator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use instep_core::CoreError;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// instep - install third-party packages into a fixed prefix
#[derive(Parser)]
#[command(name = "instep")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run a recipe: sweep stale artifacts, build, install
  Install {
    /// Path to the recipe file
    recipe: PathBuf,
  },

  /// Show what a recipe would do without executing anything
  Plan {
    /// Path to the recipe file
    recipe: PathBuf,
  },

  /// Sweep a recipe's stale artifacts out of the installation root
  Clean {
    /// Path to the recipe file
    recipe: PathBuf,
  },

  /// Report the resolved configuration
  Check {
    /// Print the configuration as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() {
  let cli = Cli::parse();

  // Initialize logging; --verbose raises the default filter
  let default_filter = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
    )
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = run(&cli);

  if let Err(err) = result {
    output::print_error(&format!("{err:#}"));
    let code = err.downcast_ref::<CoreError>().map_or(1, CoreError::exit_code);
    std::process::exit(code);
  }
}

fn run(cli: &Cli) -> Result<()> {
  match &cli.command {
    Commands::Install { recipe } => cmd::cmd_install(recipe),
    Commands::Plan { recipe } => cmd::cmd_plan(recipe),
    Commands::Clean { recipe } => cmd::cmd_clean(recipe),
    Commands::Check { json } => cmd::cmd_check(*json),
  }
}
