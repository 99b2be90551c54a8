//! instep-core: Core logic for instep
//!
//! This crate provides the configuration, recipe, step, and run
//! orchestration for installing third-party packages into a fixed prefix.

mod clean;
mod config;
mod error;
mod recipe;
mod runner;
mod step;

pub use clean::sweep_stale;
pub use config::{Config, vars};
pub use error::CoreError;
pub use recipe::{Recipe, StepSpec, SweepSpec};
pub use runner::{RunOptions, RunReport, run_recipe};
pub use step::{Step, StepKind};

// Re-export Prefix from instep-platform for convenience
pub use instep_platform::Prefix;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
