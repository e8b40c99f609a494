//! Push history audit log
//!
//! Append-only record of orchestrator runs, kept in `Push-history.md`
//! at the repository root. Each entry is a block of `field: value`
//! lines closed by a `---` delimiter; blocks are separated by one
//! blank line. Existing entries are never rewritten.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::model::PushAction;
use crate::net;

/// Name of the log file, created in the repository root
pub const LOG_FILE_NAME: &str = "Push-history.md";

/// Delimiter line closing each entry block
pub const ENTRY_DELIMITER: &str = "---";

/// Timestamp format used in entries (local time, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One audit log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Local date-time of the run, formatted per [`TIMESTAMP_FORMAT`]
    pub timestamp: String,

    /// Resolved host address, or the "Unknown IP" sentinel
    pub ip: String,

    /// What the run did
    pub action: PushAction,

    /// One-line commit summary; present only for pushed changes
    pub commit_summary: Option<String>,
}

impl HistoryEntry {
    /// Build an entry for the current moment, resolving the host
    /// address best-effort.
    pub fn now(action: PushAction, commit_summary: Option<String>) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            ip: net::local_ip_or_unknown(),
            action,
            commit_summary,
        }
    }

    /// Render the entry as a log block, including the trailing
    /// delimiter line.
    pub fn to_block(&self) -> String {
        let mut block = format!(
            "时间: {}\nIP: {}\n操作: {}\n",
            self.timestamp,
            self.ip,
            self.action.label()
        );
        if let Some(ref summary) = self.commit_summary {
            block.push_str(&format!("提交: {summary}\n"));
        }
        block.push_str(ENTRY_DELIMITER);
        block.push('\n');
        block
    }
}

/// Append an entry to the log file in `root`.
///
/// Creates the file on first write. On later writes a single blank
/// line is inserted before the new block, so entries stay visually
/// separated without altering earlier bytes.
pub fn append(root: &Path, entry: &HistoryEntry) -> io::Result<()> {
    let path = root.join(LOG_FILE_NAME);
    let exists = path.exists();

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    if exists {
        file.write_all(b"\n")?;
    }
    file.write_all(entry.to_block().as_bytes())?;
    Ok(())
}
