//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing auto-push runs.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

use super::RemoteRepo;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    ///
    /// The default branch is pinned to `main` and a throwaway commit
    /// identity is configured so commits work on bare CI hosts.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("git")
            .args(["init", "-b", "main"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to execute git init");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("git init failed: {}", stderr);
        }

        let repo = Self { dir };
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file from the repository.
    ///
    /// Returns an empty string if the file does not exist.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap_or_default()
    }

    /// Number of commits on the current branch.
    pub fn commit_count(&self) -> usize {
        self.git(&["log", "--oneline"]).lines().count()
    }

    /// Subject line of the most recent commit.
    pub fn last_commit_subject(&self) -> String {
        self.git(&["log", "-1", "--pretty=%s"]).trim().to_string()
    }

    /// Add a remote to this repository.
    pub fn add_remote(&self, name: &str, url: &str) {
        self.git(&["remote", "add", name, url]);
    }

    /// Create a TestRepo with an origin remote and one pushed commit.
    ///
    /// After this, `git pull` and `git push` both work against the
    /// remote because `main` tracks `origin/main`. The push history
    /// file is gitignored so audit writes do not dirty the tree.
    pub fn with_seeded_remote(remote: &RemoteRepo) -> Self {
        let repo = Self::new();
        repo.add_remote("origin", &remote.url());
        repo.write_file(".gitignore", "Push-history.md\n");
        repo.write_file("README.md", "# seed\n");
        repo.git(&["add", "."]);
        repo.git(&["commit", "-m", "seed"]);
        repo.git(&["push", "-u", "origin", "main"]);
        repo
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
