//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Directory entry marking a repository root (may be a file in worktrees)
pub const GIT_DIR_MARKER: &str = ".git";

/// git subcommands
pub mod commands {
    pub const PULL: &str = "pull";
    pub const STATUS: &str = "status";
    pub const ADD: &str = "add";
    pub const DIFF: &str = "diff";
    pub const COMMIT: &str = "commit";
    pub const PUSH: &str = "push";
    pub const LOG: &str = "log";
}

/// git command flags
pub mod flags {
    /// Machine-readable status listing (git status only)
    pub const PORCELAIN: &str = "--porcelain";
    /// Compare the staged set against HEAD (git diff only)
    pub const CACHED: &str = "--cached";
    /// Suppress output, signal via exit code (git diff only)
    pub const QUIET: &str = "--quiet";
    /// Specify commit message
    pub const MESSAGE: &str = "-m";
    /// One line per commit (git log only)
    pub const ONELINE: &str = "--oneline";
    /// Limit git log to the most recent commit
    pub const LAST_COMMIT: &str = "-1";
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Stage everything under the current directory
    pub const ADD_ALL: &str = ".";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
