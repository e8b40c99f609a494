//! git-auto-push - one-shot pull/commit/push with an audit trail
//!
//! Binary entry point.

use git_auto_push::run;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cwd = std::env::current_dir()?;
    run::run(&cwd)?;

    Ok(())
}
