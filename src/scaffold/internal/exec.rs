//! Delegated generation and installation steps

use anyhow::Result;
use colored::*;

use crate::error::ScaffoldError;
use crate::log;
use crate::process::{CommandRunner, Invocation};

/// Run one external command; anything but exit 0 is fatal.
pub fn run_checked(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<()> {
    log::debug("scaffold", format_args!("invoking `{}`", invocation));

    let status = runner.run(invocation).map_err(|e| ScaffoldError::ExternalCommandFailure {
        command: invocation.to_string(),
        status: format!("could not be started ({e:#})"),
    })?;

    if !status.success() {
        return Err(ScaffoldError::ExternalCommandFailure {
            command: invocation.to_string(),
            status: status.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Print the step label, then run it
pub fn run_labeled(runner: &dyn CommandRunner, label: &str, invocation: &Invocation) -> Result<()> {
    println!("{}", label.blue());
    run_checked(runner, invocation)
}
