//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use super::GitError;
use super::constants::{self, commands, errors, flags};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        // Run against the located root instead of mutating the process cwd
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);
        cmd
    }

    /// Run a git command with the given arguments, expecting success.
    ///
    /// Returns captured stdout on a zero exit status.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.command(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            // Check for common error patterns
            if stderr.to_lowercase().contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git pull` (fetch and merge from the configured remote)
    pub fn pull(&self) -> Result<String, GitError> {
        self.run(&[commands::PULL])
    }

    /// Run `git status --porcelain` for the concise change listing
    pub fn status_porcelain(&self) -> Result<String, GitError> {
        self.run(&[commands::STATUS, flags::PORCELAIN])
    }

    /// Run `git add .` to stage all working-tree changes
    pub fn add_all(&self) -> Result<(), GitError> {
        self.run(&[commands::ADD, flags::ADD_ALL])?;
        Ok(())
    }

    /// Check whether the staged set differs from HEAD.
    ///
    /// Uses `git diff --cached --quiet`, which signals via exit code
    /// only: zero means no staged difference, non-zero means one exists.
    pub fn has_staged_changes(&self) -> Result<bool, GitError> {
        let status = self
            .command(&[commands::DIFF, flags::CACHED, flags::QUIET])
            .status()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::GitNotFound
                } else {
                    GitError::IoError(e)
                }
            })?;

        Ok(!status.success())
    }

    /// Run `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Result<String, GitError> {
        self.run(&[commands::COMMIT, flags::MESSAGE, message])
    }

    /// Run `git push` to the configured remote
    pub fn push(&self) -> Result<String, GitError> {
        self.run(&[commands::PUSH])
    }

    /// Get the one-line summary of the most recent commit
    /// (abbreviated identifier + subject), trimmed.
    pub fn last_commit_summary(&self) -> Result<String, GitError> {
        let output = self.run(&[commands::LOG, flags::ONELINE, flags::LAST_COMMIT])?;
        Ok(output.trim().to_string())
    }
}
