//! Push action data model

/// What a completed run did to the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushAction {
    /// Changes were committed and pushed
    PushedChanges,

    /// The working tree was clean (or staging produced no diff)
    NoChanges,
}

impl PushAction {
    /// Label written to the `操作:` field of the audit log.
    ///
    /// The labels match the format the log file has always used, so
    /// existing history files stay uniform.
    pub fn label(&self) -> &'static str {
        match self {
            PushAction::PushedChanges => "自动推送",
            PushAction::NoChanges => "自动推送（无更改）",
        }
    }
}
