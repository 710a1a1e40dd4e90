use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, UtilError};

/// Branch, commit hash and commit message of a git checkout's `HEAD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitInfo {
    pub branch_name: String,
    pub commit_hash: String,
    pub commit_message: String,
}

impl GitInfo {
    /// Reads `HEAD` of the repository containing the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `git` cannot be spawned or any query fails.
    pub fn current() -> Result<Self> {
        Self::query(None)
    }

    /// Reads `HEAD` of the repository containing `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `git` cannot be spawned or any query fails.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::query(Some(dir.as_ref().to_path_buf()))
    }

    /// Like [`GitInfo::current`], but logs the failure and returns empty fields.
    #[must_use]
    pub fn current_or_default() -> Self {
        Self::current().unwrap_or_else(|err| {
            tracing::warn!("error while fetching git info: {err}");
            Self::default()
        })
    }

    fn query(dir: Option<PathBuf>) -> Result<Self> {
        let run = |command: &'static str, args: &[&str]| git(dir.as_deref(), command, args);
        Ok(Self {
            branch_name: run("rev-parse --abbrev-ref", &["rev-parse", "--abbrev-ref", "HEAD"])?,
            commit_hash: run("rev-parse", &["rev-parse", "HEAD"])?,
            commit_message: run("log", &["log", "-1", "--pretty=%B"])?,
        })
    }
}

/// Runs `git args...` and returns its trimmed stdout.
fn git(dir: Option<&Path>, command: &'static str, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    tracing::debug!(?args, "running git");

    let output = cmd.output().map_err(UtilError::from)?;
    if !output.status.success() {
        return Err(UtilError::Git {
            command,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
