//! Overwrite guard for an existing project directory

use anyhow::Result;

use crate::prompt::{Confirm, Decision};

use super::validation::ScaffoldRequest;

/// Proceed straight away when the target is absent; otherwise ask once.
pub fn check_overwrite(request: &ScaffoldRequest, confirm: &mut dyn Confirm) -> Result<Decision> {
    if !request.root().exists() {
        return Ok(Decision::Proceed);
    }
    confirm.confirm(&format!(
        "Directory \"{}\" already exists. Overwrite?",
        request.project_name()
    ))
}
