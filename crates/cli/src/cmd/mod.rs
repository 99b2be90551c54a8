mod check;
mod clean;
mod install;
mod plan;

pub use check::cmd_check;
pub use clean::cmd_clean;
pub use install::cmd_install;
pub use plan::cmd_plan;
