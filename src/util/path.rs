use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, UtilError};

/// Resolves `path` to an absolute, lexically normalized path.
///
/// A leading `~` expands to the user's home directory; relative paths are
/// joined onto the current directory. The path does not have to exist.
///
/// # Errors
///
/// Returns [`UtilError::NoHomeDir`] if `~` is used and no home directory can
/// be determined, or [`UtilError::Io`] if the current directory cannot be read.
pub fn to_absolute_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or(UtilError::NoHomeDir)?;
            home.join(rest)
        }
        Err(_) => path.to_path_buf(),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir().map_err(UtilError::from)?.join(expanded)
    };

    Ok(normalize(&absolute))
}

/// Removes `.` segments and folds `..` into its parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
