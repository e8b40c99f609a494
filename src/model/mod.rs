//! Domain models

mod action;
mod report;

pub use action::PushAction;
pub use report::RunReport;
