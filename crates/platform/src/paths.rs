//! Path expansion utilities

use crate::error::PlatformError;
use std::path::{Path, PathBuf};

/// Expand a path, resolving `~` to the user's home directory
///
/// # Examples
///
/// ```
/// use instep_platform::expand_path;
///
/// let path = expand_path("~/opt/prefix").unwrap();
/// assert!(path.starts_with(dirs::home_dir().unwrap()));
/// ```
pub fn expand_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, PlatformError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if path_str.starts_with("~/") {
        let home = dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)?;
        Ok(home.join(&path_str[2..]))
    } else if path_str == "~" {
        dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)
    } else {
        Ok(path.to_path_buf())
    }
}
