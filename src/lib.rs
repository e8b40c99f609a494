//! git-auto-push - one-shot pull/commit/push with an audit trail
//!
//! Automates the repetitive sync-and-publish workflow for a git
//! working tree and records each run in `Push-history.md`.
//!
//! This library provides:
//! - [`run`]: The run orchestrator
//! - [`git`]: git command execution
//! - [`repo`]: Repository root discovery
//! - [`history`]: Push history audit log
//! - [`net`]: Best-effort host address resolution
//! - [`model`]: Domain models

pub mod git;
pub mod history;
pub mod model;
pub mod net;
pub mod repo;
pub mod run;
