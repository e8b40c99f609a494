//! Run orchestrator
//!
//! One complete synchronize/publish/record cycle: locate the
//! repository root, pull (failure tolerated), stage and commit any
//! local changes under a date message, push, and append an audit
//! block to the push history.

use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::git::{GitError, GitExecutor};
use crate::history::{self, HistoryEntry};
use crate::model::{PushAction, RunReport};
use crate::repo;

/// Commit message format: the current local date
pub const COMMIT_MESSAGE_FORMAT: &str = "%Y-%m-%d";

/// Sentinel commit summary when `git log` yields nothing
pub const UNKNOWN_COMMIT: &str = "Unknown";

/// Fatal conditions that abort a run.
///
/// Pull failure and address-resolution failure are deliberately
/// absent: both are tolerated and the run continues.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("no git repository found in the current directory or any ancestor")]
    RootNotFound,

    #[error("failed to query working-tree status: {0}")]
    StatusQuery(GitError),

    #[error("failed to stage changes: {0}")]
    Stage(GitError),

    #[error("failed to commit staged changes: {0}")]
    Commit(GitError),

    #[error("failed to push to the remote: {0}")]
    Publish(GitError),

    #[error("failed to write the push history log: {0}")]
    LogWrite(std::io::Error),
}

/// Execute one full cycle starting from `start_dir`.
///
/// Progress and warnings are printed to stdout as each step runs. On
/// success the returned report says whether a commit was pushed. No
/// audit entry is written for aborted runs.
pub fn run(start_dir: &Path) -> Result<RunReport, RunError> {
    println!("Starting git auto push...");

    let root = repo::find_git_root(start_dir).ok_or(RunError::RootNotFound)?;
    println!("Repository root: {}", root.display());

    let git = GitExecutor::with_repo_path(root.clone());

    // Pull first so the commit lands on top of remote history. A
    // failed pull (offline, conflicts) must not block local work.
    println!("Pulling remote changes...");
    match git.pull() {
        Ok(output) => println!("Pull finished: {}", output.trim()),
        Err(err) => println!("Warning: pull failed, continuing: {err}"),
    }

    println!("Checking working-tree status...");
    let status = git.status_porcelain().map_err(RunError::StatusQuery)?;

    if status.trim().is_empty() {
        println!("No changes to commit");
        return record(root, PushAction::NoChanges, None);
    }

    println!("Changes detected:\n{}", status.trim_end());

    println!("Staging all changes...");
    git.add_all().map_err(RunError::Stage)?;

    // Staging can still produce an empty diff, e.g. when every listed
    // change matched an ignore rule or reverted to committed content.
    let staged = git.has_staged_changes().map_err(RunError::Stage)?;
    if !staged {
        println!("Nothing staged after add, no commit needed");
        return record(root, PushAction::NoChanges, None);
    }

    let message = Local::now().format(COMMIT_MESSAGE_FORMAT).to_string();
    println!("Committing with message: {message}");
    git.commit(&message).map_err(RunError::Commit)?;

    println!("Pushing to remote...");
    git.push().map_err(RunError::Publish)?;
    println!("Push completed");

    // Best effort: a missing summary is recorded as "Unknown" rather
    // than failing an already-published run.
    let summary = match git.last_commit_summary() {
        Ok(line) if !line.is_empty() => line,
        _ => UNKNOWN_COMMIT.to_string(),
    };

    record(root, PushAction::PushedChanges, Some(summary))
}

/// Append the audit entry and build the run report.
fn record(
    root: PathBuf,
    action: PushAction,
    commit_summary: Option<String>,
) -> Result<RunReport, RunError> {
    let entry = HistoryEntry::now(action, commit_summary.clone());
    history::append(&root, &entry).map_err(RunError::LogWrite)?;
    println!("Push history recorded");

    Ok(RunReport {
        root,
        action,
        commit_summary,
    })
}
