//! Create a new React project
//!
//! Thin command layer over [`crate::scaffold`]: resolves configuration,
//! checks the toolchain, wires the real process runner and stdin prompt,
//! and turns the result into a process exit code.
//!
//! # Example
//!
//! ```no_run
//! use kiln::commands::create;
//! use kiln::flavor::Flavor;
//!
//! fn main() -> std::process::ExitCode {
//!     create::finish(create::execute(Some("my-app".to_string()), Some(Flavor::Classic), false))
//! }
//! ```

mod internal;

use anyhow::Result;
use colored::*;
use std::process::ExitCode;

use crate::error::ScaffoldError;
use crate::flavor::Flavor;
use crate::scaffold::Outcome;

/// Execute the create command in the current directory
///
/// # Arguments
///
/// * `name` - Project name; `None` is reported as a missing argument
/// * `flavor` - Flavor override; falls back to `default_flavor` from config
/// * `yes` - Answer "yes" to the overwrite question without asking
///
/// # Process
///
/// 1. **Config**: `~/.kiln/config.toml`, then `KILN_NPM` / `KILN_NPX`
/// 2. **Preflight**: warns when npm/npx are not on PATH
/// 3. **Scaffold**: validate, guard, generate, install, materialize, patch
pub fn execute(name: Option<String>, flavor: Option<Flavor>, yes: bool) -> Result<Outcome> {
    internal::execute_create(name, flavor, yes)
}

/// Process exit status for a result
///
/// Cancellation counts as success; every error is a failure.
pub fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Process exit status for a command-line parse error
///
/// `--help` and `--version` exit 0; every usage error exits 1.
pub fn usage_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Print clap's message and map it to an exit code
pub fn usage_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    ExitCode::from(usage_status(&err))
}

/// Print a failure (if any) and map the result to an exit code
pub fn finish(result: Result<Outcome>) -> ExitCode {
    if let Err(err) = &result {
        match err.downcast_ref::<ScaffoldError>() {
            Some(e) if e.is_validation() => eprintln!("{}", e.to_string().red()),
            _ => eprintln!("{} {:#}", "❌ Failed to create project:".red(), err),
        }
    }
    ExitCode::from(exit_status(&result))
}
