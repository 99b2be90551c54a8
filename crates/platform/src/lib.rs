//! Installation-prefix layout and path utilities for instep
//!
//! This crate provides cross-platform abstractions for:
//! - The installation prefix and its conventional subdirectories
//! - Path expansion (`~` resolution)

mod error;
mod paths;
mod prefix;

pub use error::PlatformError;
pub use paths::expand_path;
pub use prefix::Prefix;
