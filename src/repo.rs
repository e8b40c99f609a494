//! Repository root discovery
//!
//! Walks upward from a start directory until a `.git` marker is found.

use std::path::{Path, PathBuf};

use crate::git::constants::GIT_DIR_MARKER;

/// Find the git repository root containing `start`.
///
/// Checks `start` itself and each ancestor directory for a `.git`
/// entry. The marker may be a directory or, in linked worktrees, a
/// file; either counts. Returns `None` when no ancestor qualifies.
pub fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(GIT_DIR_MARKER).exists())
        .map(Path::to_path_buf)
}
