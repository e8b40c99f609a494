//! Run report data model

use std::path::PathBuf;

use super::PushAction;

/// Summary of one completed orchestrator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Repository root the run acted on
    pub root: PathBuf,

    /// What the run did
    pub action: PushAction,

    /// One-line summary of the pushed commit, if any
    pub commit_summary: Option<String>,
}

impl RunReport {
    /// Did this run publish a new commit?
    pub fn pushed(&self) -> bool {
        self.action == PushAction::PushedChanges
    }
}
